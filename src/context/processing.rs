//! Local context processing.
//!
//! A local context is either `null` (a reset), an object of term
//! definitions, or an array of such, evaluated left to right. Strings are
//! references to remote contexts, which this processor does not fetch.
use crate::util::entry_of;
use crate::{
	is_keyword, ContainerKind, Context, LenientLangTagBuf, ProcessError, TermDefinition, Type,
};
use json_syntax::{object::Entry, Object, Value};

/// Local context processing.
pub trait Process {
	/// Folds this local context into a copy of `active_context` and returns
	/// the result.
	fn process(&self, active_context: &Context) -> Result<Context, ProcessError>;
}

impl Process for Value {
	fn process(&self, active_context: &Context) -> Result<Context, ProcessError> {
		let mut result = active_context.clone();
		process_context(&mut result, self)?;
		Ok(result)
	}
}

pub(crate) fn process_context(
	active_context: &mut Context,
	local_context: &Value,
) -> Result<(), ProcessError> {
	match local_context {
		// A null context resets everything but the base IRI.
		Value::Null => {
			*active_context = Context::new(active_context.base_iri().cloned());
			Ok(())
		}
		Value::Array(contexts) => {
			for context in contexts {
				process_context(active_context, context)?;
			}
			Ok(())
		}
		Value::Object(definitions) => {
			for Entry { key, value } in definitions.entries() {
				let term = key.as_str();
				if is_keyword(term) {
					continue;
				}
				define_term(active_context, definitions, term, value)?;
			}
			Ok(())
		}
		Value::String(iri) => Err(ProcessError::RemoteContext(iri.as_str().to_owned())),
		_ => Err(ProcessError::InvalidLocalContext),
	}
}

/// Records the definition of a single `(term, value)` entry.
fn define_term(
	active_context: &mut Context,
	local_context: &Object,
	term: &str,
	value: &Value,
) -> Result<(), ProcessError> {
	match value {
		Value::Null => {
			active_context.set(term, None);
		}
		Value::String(iri) => {
			let id = expand_prefix(active_context, local_context, iri.as_str(), &mut Vec::new())?;
			active_context.set(term, Some(TermDefinition::from_id(id)));
		}
		Value::Object(definition) => {
			let mut result = TermDefinition::default();

			if let Some(Value::String(id)) = entry_of(definition, "@id") {
				result.id = Some(expand_prefix(
					active_context,
					local_context,
					id.as_str(),
					&mut Vec::new(),
				)?);
			}

			let typ = entry_of(definition, "@type");
			if let Some(Value::String(typ)) = typ {
				result.typ = Some(Type::new(expand_prefix(
					active_context,
					local_context,
					typ.as_str(),
					&mut Vec::new(),
				)?));
			}

			// A language only applies to terms without datatype coercion.
			if typ.is_none() {
				if let Some(Value::String(language)) = entry_of(definition, "@language") {
					result.language = Some(LenientLangTagBuf::from(language.as_str()));
				}
			}

			if let Some(Value::String(container)) = entry_of(definition, "@container") {
				result.container = ContainerKind::try_from(container.as_str()).ok();
			}

			active_context.set(term, Some(result));
		}
		_ => {
			// Not a term definition; ignored.
		}
	}

	Ok(())
}

/// Resolves a possibly-prefixed IRI against the pending local context and the
/// active context.
///
/// `path` records the prefixes already traversed so a loop among definitions
/// can be reported instead of recursed into.
fn expand_prefix(
	active_context: &Context,
	local_context: &Object,
	value: &str,
	path: &mut Vec<String>,
) -> Result<String, ProcessError> {
	let Some((prefix, suffix)) = value.split_once(':') else {
		return Ok(value.to_owned());
	};

	if path.iter().any(|visited| visited == prefix) {
		path.push(prefix.to_owned());
		return Err(ProcessError::CyclicIriMapping(std::mem::take(path)));
	}
	path.push(prefix.to_owned());

	// Definitions still being processed take precedence over already
	// recorded ones.
	if let Some(Value::String(mapping)) = entry_of(local_context, prefix) {
		let resolved = expand_prefix(active_context, local_context, mapping.as_str(), path)?;
		return Ok(resolved + suffix);
	}

	if let Some(id) = active_context.get(prefix).and_then(TermDefinition::id) {
		return Ok(format!("{id}{suffix}"));
	}

	Ok(value.to_owned())
}

#[cfg(test)]
mod tests {
	use super::*;
	use json_syntax::json;

	#[test]
	fn pending_definitions_resolve_in_any_order() {
		let context = json!({
			"age": "ex:age",
			"ex": "http://example.com/"
		})
		.process(&Context::default())
		.unwrap();

		assert_eq!(
			context.get("age").and_then(TermDefinition::id),
			Some("http://example.com/age")
		);
	}

	#[test]
	fn cycle_paths_name_every_prefix() {
		let err = json!({"a": "b:x", "b": "c:y", "c": "a:z"})
			.process(&Context::default())
			.unwrap_err();

		match err {
			ProcessError::CyclicIriMapping(path) => {
				for prefix in ["a", "b", "c"] {
					assert!(path.iter().any(|p| p == prefix), "missing `{prefix}`");
				}
			}
			other => panic!("unexpected error: {other}"),
		}
	}
}
