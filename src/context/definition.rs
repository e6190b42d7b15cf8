use crate::{ContainerKind, LenientLangTagBuf};

/// Datatype coercion carried by a term definition.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Type {
	/// The identifier sentinel (`@id`): string values of properties bound to
	/// the term become identifier objects instead of value objects.
	Id,

	/// Datatype IRI attached to literal values of the term.
	Iri(String),
}

impl Type {
	/// Reads a coercion target from its resolved form.
	pub fn new(iri: String) -> Self {
		if iri == "@id" {
			Self::Id
		} else {
			Self::Iri(iri)
		}
	}

	pub fn as_str(&self) -> &str {
		match self {
			Self::Id => "@id",
			Self::Iri(iri) => iri,
		}
	}
}

/// A single term definition of the active context.
///
/// Every field is optional; a definition with no IRI mapping can still carry
/// coercion information for the term. Redefining a term replaces the whole
/// record.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TermDefinition {
	/// IRI the term maps to.
	pub id: Option<String>,

	/// Datatype coercion applied to values of the term.
	pub typ: Option<Type>,

	/// Language applied to plain string values of the term.
	pub language: Option<LenientLangTagBuf>,

	/// Container kind of the term.
	pub container: Option<ContainerKind>,
}

impl TermDefinition {
	/// Definition carrying only an IRI mapping.
	pub fn from_id(id: String) -> Self {
		Self {
			id: Some(id),
			..Self::default()
		}
	}

	pub fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	pub fn typ(&self) -> Option<&Type> {
		self.typ.as_ref()
	}

	pub fn language(&self) -> Option<&LenientLangTagBuf> {
		self.language.as_ref()
	}

	pub fn container(&self) -> Option<ContainerKind> {
		self.container
	}
}
