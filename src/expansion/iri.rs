use crate::{Context, TermDefinition};
use iref::{IriBuf, IriRef};

/// IRI expansion.
///
/// Resolves `value` to an identifier under the active context: a defined
/// term is replaced by its IRI mapping, a compact IRI has its prefix
/// expanded, and absolute IRIs and blank node identifiers pass through
/// verbatim. When `document_relative` is set, anything else is resolved
/// against the base IRI of the context, if there is one; strings that cannot
/// be resolved are returned unchanged.
pub(crate) fn expand_iri(
	active_context: &Context,
	value: &str,
	document_relative: bool,
) -> String {
	if let Some(id) = active_context.get(value).and_then(TermDefinition::id) {
		return id.to_owned();
	}

	if let Some((prefix, suffix)) = value.split_once(':') {
		// Already an absolute IRI.
		if suffix.starts_with("//") {
			return value.to_owned();
		}

		// Blank node identifier.
		if prefix == "_" {
			return value.to_owned();
		}

		// Compact IRI.
		if let Some(id) = active_context.get(prefix).and_then(TermDefinition::id) {
			return format!("{id}{suffix}");
		}
	}

	if document_relative {
		if let Some(resolved) = resolve_reference(active_context.base_iri(), value) {
			return resolved;
		}
	}

	value.to_owned()
}

fn resolve_reference(base_iri: Option<&IriBuf>, value: &str) -> Option<String> {
	let base_iri = base_iri?;
	let reference = IriRef::new(value).ok()?;
	Some(reference.resolved(base_iri.as_iri()).into_string())
}
