use std::fmt;

#[derive(Clone, Copy, Debug)]
pub struct NotAKeyword<T>(pub T);

/// Reserved document keys.
///
/// Every other string key of an object is a user term or an IRI.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Keyword {
	/// `@container`.
	/// Used in a term definition to set the container kind of a term.
	Container,

	/// `@context`.
	/// Used to define the short-hand names that are used throughout a
	/// document.
	Context,

	/// `@id`.
	/// Used to uniquely identify node objects that are being described in the
	/// document with IRIs or blank node identifiers.
	Id,

	/// `@language`.
	/// Used to specify the language of a particular string value, or a
	/// term-bound language inside a term definition.
	Language,

	/// `@list`.
	/// Used to express an ordered set of data.
	List,

	/// `@set`.
	/// Used to express an unordered set of data and to ensure that values are
	/// always represented as arrays.
	Set,

	/// `@type`.
	/// Used to set the type of a node or the datatype of a typed value.
	Type,

	/// `@value`.
	/// Used to specify the data that is associated with a particular property
	/// in the graph.
	Value,
}

impl Keyword {
	pub fn into_str(self) -> &'static str {
		use Keyword::*;
		match self {
			Container => "@container",
			Context => "@context",
			Id => "@id",
			Language => "@language",
			List => "@list",
			Set => "@set",
			Type => "@type",
			Value => "@value",
		}
	}
}

impl<'a> TryFrom<&'a str> for Keyword {
	type Error = NotAKeyword<&'a str>;

	fn try_from(s: &'a str) -> Result<Keyword, NotAKeyword<&'a str>> {
		use Keyword::*;
		match s {
			"@container" => Ok(Container),
			"@context" => Ok(Context),
			"@id" => Ok(Id),
			"@language" => Ok(Language),
			"@list" => Ok(List),
			"@set" => Ok(Set),
			"@type" => Ok(Type),
			"@value" => Ok(Value),
			_ => Err(NotAKeyword(s)),
		}
	}
}

impl From<Keyword> for &'static str {
	fn from(k: Keyword) -> &'static str {
		k.into_str()
	}
}

impl fmt::Display for Keyword {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.into_str().fmt(f)
	}
}

pub fn is_keyword(str: &str) -> bool {
	Keyword::try_from(str).is_ok()
}
