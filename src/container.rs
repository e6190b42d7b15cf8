use crate::Keyword;

/// Container kind attached to a term definition.
///
/// Controls how array values of the term are grouped during expansion and
/// compaction.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ContainerKind {
	List,
	Set,
}

impl ContainerKind {
	pub fn into_keyword(self) -> Keyword {
		self.into()
	}

	pub fn keyword(&self) -> Keyword {
		self.into_keyword()
	}

	pub fn as_str(&self) -> &'static str {
		self.into_keyword().into_str()
	}
}

impl<'a> TryFrom<&'a str> for ContainerKind {
	type Error = &'a str;

	fn try_from(str: &'a str) -> Result<ContainerKind, &'a str> {
		match str {
			"@list" => Ok(Self::List),
			"@set" => Ok(Self::Set),
			_ => Err(str),
		}
	}
}

impl TryFrom<Keyword> for ContainerKind {
	type Error = Keyword;

	fn try_from(k: Keyword) -> Result<ContainerKind, Keyword> {
		match k {
			Keyword::List => Ok(Self::List),
			Keyword::Set => Ok(Self::Set),
			k => Err(k),
		}
	}
}

impl From<ContainerKind> for Keyword {
	fn from(c: ContainerKind) -> Keyword {
		match c {
			ContainerKind::List => Keyword::List,
			ContainerKind::Set => Keyword::Set,
		}
	}
}
