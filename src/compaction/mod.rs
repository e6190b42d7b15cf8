//! Compaction algorithm.
//!
//! Rewrites an expanded document back into its shortest term-based form
//! under a target context: identifiers are shortened to terms or prefixed
//! names, matching coercions fold value objects to bare literals, and
//! redundant wrappers are collapsed.
use crate::object::Ref;
use crate::util::{add_value, has_entry};
use crate::{is_keyword, ContainerKind, Context, Error, SyntaxError, SyntaxErrorKind};
use json_syntax::{object::Entry, Object, Value};

mod iri;
mod value;

pub(crate) use iri::compact_iri;
pub(crate) use value::compact_value;

/// Document compaction.
///
/// This trait provides the functions necessary to compact an expanded
/// document. It is implemented by [`json_syntax::Value`].
pub trait Compact {
	/// Compacts the document with an explicit active property and the
	/// `optimize` flag, which additionally shortens identifiers into
	/// prefixed names.
	fn compact_with(
		&self,
		active_context: &Context,
		active_property: Option<&str>,
		optimize: bool,
	) -> Result<Value, Error>;

	/// Compacts the document against `active_context`.
	fn compact(&self, active_context: &Context) -> Result<Value, Error> {
		self.compact_with(active_context, None, false)
	}
}

impl Compact for Value {
	fn compact_with(
		&self,
		active_context: &Context,
		active_property: Option<&str>,
		optimize: bool,
	) -> Result<Value, Error> {
		compact_element(active_context, active_property, self, optimize)
	}
}

pub(crate) fn compact_element(
	active_context: &Context,
	active_property: Option<&str>,
	element: &Value,
	optimize: bool,
) -> Result<Value, Error> {
	match element {
		Value::Array(items) => compact_array(active_context, active_property, items, optimize),
		Value::Object(object) => compact_object(active_context, active_property, object, optimize),
		scalar => Ok(scalar.clone()),
	}
}

/// Compacts every element of an array, unwrapping a singleton result unless
/// the active property has a `@set` container.
fn compact_array(
	active_context: &Context,
	active_property: Option<&str>,
	items: &[Value],
	optimize: bool,
) -> Result<Value, Error> {
	let mut result = Vec::with_capacity(items.len());

	for item in items {
		let compacted = compact_element(active_context, active_property, item, optimize)?;
		if !compacted.is_null() {
			result.push(compacted);
		}
	}

	if result.len() == 1
		&& active_context.container_of(active_property) != Some(ContainerKind::Set)
	{
		if let Some(single) = result.pop() {
			return Ok(single);
		}
	}

	Ok(Value::Array(result))
}

fn compact_object(
	active_context: &Context,
	active_property: Option<&str>,
	object: &Object,
	optimize: bool,
) -> Result<Value, Error> {
	match Ref::classify(object)? {
		Ref::Value(_) | Ref::Id(_) => Ok(compact_value(
			active_context,
			active_property,
			object,
			optimize,
		)),
		Ref::List(items) => {
			if active_context.container_of(active_property) == Some(ContainerKind::List) {
				// The container already implies the list; the wrapper goes.
				compact_array(active_context, active_property, items, optimize)
			} else {
				let mut compacted = Vec::with_capacity(items.len());
				for item in items {
					compacted.push(compact_element(
						active_context,
						active_property,
						item,
						optimize,
					)?);
				}
				let mut result = Object::new();
				result.insert("@list".into(), Value::Array(compacted));
				Ok(Value::Object(result))
			}
		}
		Ref::Node(object) => compact_node(active_context, object, optimize),
	}
}

/// Compacts a node object key by key.
fn compact_node(
	active_context: &Context,
	object: &Object,
	optimize: bool,
) -> Result<Value, Error> {
	let mut result = Object::new();

	for Entry { key, value } in object.entries() {
		let term = key.as_str();
		match term {
			"@id" | "@type" => {
				let values = Value::force_as_array(value);
				let mut compacted = Vec::with_capacity(values.len());
				for item in values {
					let Value::String(iri) = item else {
						let kind = match term {
							"@id" => SyntaxErrorKind::InvalidIdValue,
							_ => SyntaxErrorKind::InvalidTypeValue,
						};
						return Err(SyntaxError::new(kind, value).into());
					};
					compacted.push(Value::String(
						compact_iri(active_context, iri.as_str(), optimize)
							.as_str()
							.into(),
					));
				}
				let compacted = if compacted.len() == 1 {
					compacted.pop().unwrap_or(Value::Null)
				} else {
					Value::Array(compacted)
				};
				result.insert(term.into(), compacted);
			}
			_ => {
				let compacted_key = if is_keyword(term) {
					term.to_owned()
				} else {
					compact_iri(active_context, term, optimize)
				};

				let compacted = compact_element(
					active_context,
					Some(compacted_key.as_str()),
					value,
					optimize,
				)?;

				// Two identifiers may shorten to the same key; merge them
				// into an array instead of dropping one.
				if has_entry(&result, &compacted_key) {
					add_value(&mut result, &compacted_key, compacted);
				} else {
					result.insert(compacted_key.as_str().into(), compacted);
				}
			}
		}
	}

	Ok(Value::Object(result))
}
