use super::{expand_array, expand_node, expand_value};
use crate::{Context, Error};
use json_syntax::Value;

/// Expands a single element, dispatching on its variant.
pub(crate) fn expand_element(
	active_context: &Context,
	active_property: Option<&str>,
	element: &Value,
) -> Result<Value, Error> {
	match element {
		Value::Array(items) => Ok(Value::Array(expand_array(
			active_context,
			active_property,
			items,
		)?)),
		Value::Object(object) => expand_node(active_context, active_property, object),
		scalar => Ok(expand_value(active_context, active_property, scalar)?),
	}
}
