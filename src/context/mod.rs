//! Active context and the processing algorithm that builds it.
mod definition;
pub mod processing;

use crate::LenientLangTagBuf;
use indexmap::IndexMap;
use iref::IriBuf;

pub use definition::{TermDefinition, Type};
pub use processing::Process;

/// Active context.
///
/// Maps terms to their definitions. Expansion and compaction are both
/// performed under an active context; [`processing`] folds local contexts
/// into one.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Context {
	base_iri: Option<IriBuf>,
	default_language: Option<LenientLangTagBuf>,
	definitions: IndexMap<String, TermDefinition>,
}

impl Context {
	/// Creates an empty context with the given base IRI.
	///
	/// The base IRI is used to resolve relative identifiers during expansion.
	pub fn new(base_iri: Option<IriBuf>) -> Self {
		Self {
			base_iri,
			default_language: None,
			definitions: IndexMap::new(),
		}
	}

	/// Returns a reference to the given `term` definition, if any.
	pub fn get(&self, term: &str) -> Option<&TermDefinition> {
		self.definitions.get(term)
	}

	/// Checks if the given `term` is defined.
	pub fn contains_term(&self, term: &str) -> bool {
		self.definitions.contains_key(term)
	}

	/// Sets or removes the definition of `term`, returning the previous one.
	pub fn set(
		&mut self,
		term: &str,
		definition: Option<TermDefinition>,
	) -> Option<TermDefinition> {
		match definition {
			Some(definition) => self.definitions.insert(term.to_owned(), definition),
			None => self.definitions.shift_remove(term),
		}
	}

	/// Returns the base IRI of the context.
	pub fn base_iri(&self) -> Option<&IriBuf> {
		self.base_iri.as_ref()
	}

	/// Returns the default language applied to plain strings.
	pub fn default_language(&self) -> Option<&LenientLangTagBuf> {
		self.default_language.as_ref()
	}

	/// Sets the default language.
	pub fn set_default_language(&mut self, language: Option<LenientLangTagBuf>) {
		self.default_language = language;
	}

	/// Returns the number of terms defined.
	pub fn len(&self) -> usize {
		self.definitions.len()
	}

	/// Checks if no terms are defined.
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	/// Iterates over the term definitions, in definition order.
	pub fn definitions(&self) -> impl Iterator<Item = (&str, &TermDefinition)> {
		self.definitions
			.iter()
			.map(|(term, definition)| (term.as_str(), definition))
	}

	/// Container kind of `property`, if the property is a defined term.
	pub(crate) fn container_of(&self, property: Option<&str>) -> Option<crate::ContainerKind> {
		property
			.and_then(|property| self.get(property))
			.and_then(TermDefinition::container)
	}
}

impl Default for Context {
	fn default() -> Self {
		Self::new(None)
	}
}
