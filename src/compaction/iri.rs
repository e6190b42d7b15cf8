use crate::Context;
use std::cmp::Ordering;

/// Shortest first; ties broken lexicographically.
fn shortest_least(a: &str, b: &str) -> Ordering {
	a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// IRI compaction.
///
/// A term whose IRI mapping equals `iri` wins outright, first defined first
/// served. In optimize mode, terms whose mapping is a proper prefix of `iri`
/// yield `term:suffix` candidates and the shortest one (ties broken
/// lexicographically) is picked. Without any candidate the IRI is returned
/// verbatim.
pub(crate) fn compact_iri(active_context: &Context, iri: &str, optimize: bool) -> String {
	let mut candidates = Vec::new();

	for (term, definition) in active_context.definitions() {
		let Some(id) = definition.id() else {
			continue;
		};

		if id == iri {
			return term.to_owned();
		}

		if optimize && !id.is_empty() {
			if let Some(suffix) = iri.strip_prefix(id) {
				if !suffix.is_empty() {
					candidates.push(format!("{term}:{suffix}"));
				}
			}
		}
	}

	if candidates.is_empty() {
		return iri.to_owned();
	}

	candidates.sort_unstable_by(|a, b| shortest_least(a, b));
	candidates.swap_remove(0)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::TermDefinition;

	fn context(terms: &[(&str, &str)]) -> Context {
		let mut context = Context::default();
		for (term, id) in terms {
			context.set(term, Some(TermDefinition::from_id((*id).to_owned())));
		}
		context
	}

	#[test]
	fn exact_term_beats_prefix() {
		let context = context(&[
			("s", "http://schema.org/"),
			("name", "http://schema.org/name"),
		]);
		assert_eq!(
			compact_iri(&context, "http://schema.org/name", true),
			"name"
		);
		assert_eq!(
			compact_iri(&context, "http://schema.org/name", false),
			"name"
		);
	}

	#[test]
	fn shortest_candidate_wins() {
		let context = context(&[("longer", "http://e/"), ("ab", "http://e/")]);
		assert_eq!(compact_iri(&context, "http://e/x", true), "ab:x");
	}

	#[test]
	fn equal_lengths_break_lexicographically() {
		let context = context(&[("ab", "http://e/"), ("aa", "http://e/")]);
		assert_eq!(compact_iri(&context, "http://e/x", true), "aa:x");
	}

	#[test]
	fn prefixes_need_optimize() {
		let context = context(&[("e", "http://e/")]);
		assert_eq!(compact_iri(&context, "http://e/x", false), "http://e/x");
		assert_eq!(compact_iri(&context, "http://e/x", true), "e:x");
	}

	#[test]
	fn unknown_iris_pass_through() {
		let context = context(&[("e", "http://e/")]);
		assert_eq!(
			compact_iri(&context, "http://other/x", true),
			"http://other/x"
		);
	}
}
