pub use langtag::{InvalidLangTag, LangTag, LangTagBuf};
use std::fmt;

/// Owned language tag that may not be well-formed.
///
/// Documents are allowed to carry malformed tags; they are preserved verbatim
/// and only compared case-insensitively, which is all the algorithms require.
#[derive(Debug, Clone)]
pub struct LenientLangTagBuf(String);

impl LenientLangTagBuf {
	pub fn new(s: String) -> (Self, Option<InvalidLangTag<String>>) {
		let err = LangTag::new(s.as_str())
			.err()
			.map(|InvalidLangTag(s)| InvalidLangTag(s.to_owned()));
		(Self(s), err)
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn is_well_formed(&self) -> bool {
		LangTag::new(self.as_str()).is_ok()
	}

	pub fn as_well_formed(&self) -> Option<&LangTag> {
		LangTag::new(self.as_str()).ok()
	}

	pub fn into_string(self) -> String {
		self.0
	}
}

impl PartialEq for LenientLangTagBuf {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_ignore_ascii_case(&other.0)
	}
}

impl Eq for LenientLangTagBuf {}

impl PartialEq<str> for LenientLangTagBuf {
	fn eq(&self, other: &str) -> bool {
		self.0.eq_ignore_ascii_case(other)
	}
}

impl AsRef<str> for LenientLangTagBuf {
	fn as_ref(&self) -> &str {
		self.as_str()
	}
}

impl From<LangTagBuf> for LenientLangTagBuf {
	fn from(tag: LangTagBuf) -> Self {
		Self(tag.into_string())
	}
}

impl From<String> for LenientLangTagBuf {
	fn from(tag: String) -> Self {
		Self(tag)
	}
}

impl From<&str> for LenientLangTagBuf {
	fn from(tag: &str) -> Self {
		Self(tag.to_owned())
	}
}

impl fmt::Display for LenientLangTagBuf {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}
