//! Shape classification of expanded objects.
//!
//! After expansion every object is exactly one of four shapes: a value
//! object, a lone identifier object, a list object or a node object. The
//! [`Ref`] view validates an object against those shapes once, so downstream
//! passes can pattern-match without re-checking the invariants.
use crate::util::has_entry;
use crate::{Keyword, SyntaxError, SyntaxErrorKind};
use json_syntax::{object::Entry, Object, Value};

/// Borrowed view of an expanded object, classified by shape.
pub enum Ref<'a> {
	/// Value object: `@value` with at most one of `@type` or `@language`.
	Value(ValueRef<'a>),

	/// Lone identifier object: `@id` and nothing else.
	Id(&'a str),

	/// List object: `@list` and nothing else.
	List(&'a [Value]),

	/// Any other node object.
	Node(&'a Object),
}

/// Borrowed fields of a value object.
pub struct ValueRef<'a> {
	pub value: &'a Value,
	pub typ: Option<&'a str>,
	pub language: Option<&'a str>,
}

impl<'a> Ref<'a> {
	/// Classifies `object`, validating the shape invariants of expanded form.
	pub fn classify(object: &'a Object) -> Result<Self, SyntaxError> {
		let error = |kind| SyntaxError::new(kind, &Value::Object(object.clone()));

		let mut value = None;
		let mut typ = None;
		let mut language = None;
		let mut id = None;
		let mut list = None;
		let mut others = 0usize;

		for Entry {
			key,
			value: entry_value,
		} in object.entries()
		{
			let slot = match key.as_str() {
				"@value" => (&mut value, Keyword::Value),
				"@type" => (&mut typ, Keyword::Type),
				"@language" => (&mut language, Keyword::Language),
				"@id" => (&mut id, Keyword::Id),
				"@list" => (&mut list, Keyword::List),
				"@set" => return Err(error(SyntaxErrorKind::InvalidSetOrListObject)),
				_ => {
					others += 1;
					continue;
				}
			};
			if slot.0.replace(entry_value).is_some() {
				return Err(error(SyntaxErrorKind::DuplicateKey(slot.1)));
			}
		}

		if let Some(value) = value {
			if others > 0 || id.is_some() || list.is_some() {
				return Err(error(SyntaxErrorKind::InvalidValueObject));
			}
			let typ = match typ {
				None => None,
				Some(Value::String(typ)) => Some(typ.as_str()),
				Some(_) => return Err(error(SyntaxErrorKind::InvalidTypeValue)),
			};
			let language = language.and_then(Value::as_string);
			if typ.is_some() && language.is_some() {
				return Err(error(SyntaxErrorKind::InvalidValueObject));
			}
			return Ok(Self::Value(ValueRef {
				value,
				typ,
				language,
			}));
		}

		if let Some(list) = list {
			if object.len() > 1 {
				return Err(error(SyntaxErrorKind::InvalidSetOrListObject));
			}
			let Value::Array(items) = list else {
				return Err(error(SyntaxErrorKind::InvalidSetOrListObject));
			};
			if items.iter().any(is_list_object) {
				return Err(error(SyntaxErrorKind::ListOfLists));
			}
			return Ok(Self::List(items));
		}

		if object.len() == 1 {
			if let Some(id) = id {
				let Value::String(id) = id else {
					return Err(error(SyntaxErrorKind::InvalidIdValue));
				};
				return Ok(Self::Id(id.as_str()));
			}
		}

		Ok(Self::Node(object))
	}
}

/// Checks if `value` is a list object.
pub fn is_list_object(value: &Value) -> bool {
	matches!(value, Value::Object(object) if has_entry(object, "@list"))
}
