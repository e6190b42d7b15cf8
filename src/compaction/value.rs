use super::compact_iri;
use crate::util::entry_of;
use crate::{Context, TermDefinition, Type};
use json_syntax::{Object, Value};

/// Value compaction.
///
/// Reduces a value or identifier object to its shortest form under the
/// coercions bound to the active property: identifier-coerced objects fold
/// to a plain identifier string, matching datatypes and languages fold to
/// the bare literal, and remaining `@id`/`@type` entries are shortened.
/// Objects that cannot be reduced are returned unchanged.
pub(crate) fn compact_value(
	active_context: &Context,
	active_property: Option<&str>,
	object: &Object,
	optimize: bool,
) -> Value {
	let definition = active_property.and_then(|property| active_context.get(property));

	if let Some(Value::String(id)) = entry_of(object, "@id") {
		// Identifier coercion folds the object to the identifier itself.
		if matches!(definition.and_then(TermDefinition::typ), Some(Type::Id)) {
			return Value::String(
				compact_iri(active_context, id.as_str(), optimize)
					.as_str()
					.into(),
			);
		}

		if object.len() == 1 {
			let mut result = Object::new();
			result.insert(
				"@id".into(),
				Value::String(
					compact_iri(active_context, id.as_str(), optimize)
						.as_str()
						.into(),
				),
			);
			return Value::Object(result);
		}
	}

	if let Some(value) = entry_of(object, "@value") {
		// A datatype matching the property coercion is implied by it.
		if let Some(Type::Iri(typ)) = definition.and_then(TermDefinition::typ) {
			if entry_of(object, "@type").and_then(Value::as_string) == Some(typ.as_str()) {
				return value.clone();
			}
		}

		if object.len() == 1 {
			return value.clone();
		}

		if let Some(Value::String(language)) = entry_of(object, "@language") {
			if let Some(bound) = definition.and_then(TermDefinition::language) {
				if object.len() == 2 && bound == language.as_str() {
					return value.clone();
				}
			}
		}

		if let Some(Value::String(typ)) = entry_of(object, "@type") {
			let mut result = Object::new();
			result.insert("@value".into(), value.clone());
			result.insert(
				"@type".into(),
				Value::String(
					compact_iri(active_context, typ.as_str(), optimize)
						.as_str()
						.into(),
				),
			);
			return Value::Object(result);
		}
	}

	Value::Object(object.clone())
}
