use crate::Keyword;
use json_syntax::Value;

/// Any error raised by the processor.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Syntax(#[from] SyntaxError),

	#[error(transparent)]
	Process(#[from] ProcessError),
}

/// Malformed textual input.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	#[error("invalid UTF-8 sequence: {0}")]
	InvalidUtf8(#[from] std::str::Utf8Error),

	#[error("maximum nesting depth exceeded")]
	TooDeep,

	/// Any other decoder failure, including control characters in strings.
	#[error("syntax error: {0}")]
	Syntax(String),
}

/// Structural violation of the document model.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct SyntaxError {
	kind: SyntaxErrorKind,
	node: Value,
}

impl SyntaxError {
	pub fn new(kind: SyntaxErrorKind, node: &Value) -> Self {
		Self {
			kind,
			node: node.clone(),
		}
	}

	pub fn kind(&self) -> &SyntaxErrorKind {
		&self.kind
	}

	/// The node that triggered the error.
	pub fn node(&self) -> &Value {
		&self.node
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum SyntaxErrorKind {
	#[error("duplicate `{0}` entry")]
	DuplicateKey(Keyword),

	#[error("invalid `@id` value")]
	InvalidIdValue,

	#[error("invalid `@type` value")]
	InvalidTypeValue,

	#[error("invalid `@value` value")]
	InvalidValueObjectValue,

	#[error("invalid language-tagged string")]
	InvalidLanguageTaggedString,

	#[error("invalid value object")]
	InvalidValueObject,

	#[error("invalid set or list object")]
	InvalidSetOrListObject,

	#[error("list of lists")]
	ListOfLists,

	#[error("unexpected literal value")]
	UnexpectedLiteral,
}

/// Context evaluation failure.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
	/// A term definition refers to itself through a chain of prefixes.
	/// The payload is the traversal path that closed the loop.
	#[error("cyclic IRI mapping through `{}`", .0.join("`, `"))]
	CyclicIriMapping(Vec<String>),

	/// Remote contexts are not fetched; a string-valued local context is
	/// rejected as such a reference.
	#[error("remote contexts are not supported: `{0}`")]
	RemoteContext(String),

	#[error("invalid local context")]
	InvalidLocalContext,
}
