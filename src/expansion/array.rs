use super::expand_element;
use crate::{ContainerKind, Context, Error};
use json_syntax::Value;

/// Expands every element of an array.
///
/// Null results are dropped. An element that expanded to an array is spliced
/// into the result, unless the active property has a `@list` container, in
/// which case the nested array is kept as a single element.
pub(crate) fn expand_array(
	active_context: &Context,
	active_property: Option<&str>,
	elements: &[Value],
) -> Result<Vec<Value>, Error> {
	let is_list = active_context.container_of(active_property) == Some(ContainerKind::List);

	let mut result = Vec::with_capacity(elements.len());

	for item in elements {
		match expand_element(active_context, active_property, item)? {
			Value::Null => (),
			Value::Array(items) => {
				if is_list {
					result.push(Value::Array(items));
				} else {
					result.extend(items);
				}
			}
			expanded => result.push(expanded),
		}
	}

	Ok(result)
}
