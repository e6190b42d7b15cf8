use super::expand_iri;
use crate::{Context, SyntaxError, SyntaxErrorKind, TermDefinition, Type};
use json_syntax::{Object, Value};

/// Value expansion.
///
/// Rewrites a scalar according to the coercions bound to the active
/// property: identifier-coerced strings become identifier objects, datatyped
/// values become typed value objects, and plain strings become value objects
/// carrying the applicable language, if any. Other scalars are returned
/// unchanged; null is returned as-is and dropped by the caller.
pub(crate) fn expand_value(
	active_context: &Context,
	active_property: Option<&str>,
	value: &Value,
) -> Result<Value, SyntaxError> {
	if matches!(value, Value::Array(_) | Value::Object(_)) {
		return Err(SyntaxError::new(SyntaxErrorKind::UnexpectedLiteral, value));
	}

	if value.is_null() {
		return Ok(Value::Null);
	}

	let definition = active_property.and_then(|property| active_context.get(property));

	match definition.and_then(TermDefinition::typ) {
		// Identifier coercion only applies to strings; anything else falls
		// through to literal handling.
		Some(Type::Id) => {
			if let Value::String(id) = value {
				let mut object = Object::new();
				object.insert(
					"@id".into(),
					Value::String(
						expand_iri(active_context, id.as_str(), true)
							.as_str()
							.into(),
					),
				);
				return Ok(Value::Object(object));
			}
		}
		Some(Type::Iri(typ)) => {
			let mut object = Object::new();
			object.insert("@value".into(), value.clone());
			object.insert("@type".into(), Value::String(typ.as_str().into()));
			return Ok(Value::Object(object));
		}
		None => (),
	}

	if let Value::String(_) = value {
		let mut object = Object::new();
		object.insert("@value".into(), value.clone());

		let language = definition
			.and_then(TermDefinition::language)
			.or_else(|| active_context.default_language());
		if let Some(language) = language {
			object.insert("@language".into(), Value::String(language.as_str().into()));
		}

		return Ok(Value::Object(object));
	}

	Ok(value.clone())
}
