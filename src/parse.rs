use crate::ParseError;
use json_syntax::{Parse, Value};

/// Maximum nesting depth accepted by [`parse`].
pub const MAX_DEPTH: usize = 512;

/// Decodes the textual interchange form into a generic tree.
///
/// The input is validated as UTF-8 before decoding and the resulting tree is
/// bounded to [`MAX_DEPTH`] nested containers. An empty (or all-whitespace)
/// document yields [`Value::Null`]. Slashes in strings are kept as-is, so a
/// decoded document prints back without re-escaping them.
pub fn parse(content: &[u8]) -> Result<Value, ParseError> {
	let text = std::str::from_utf8(content)?;

	if text.trim().is_empty() {
		return Ok(Value::Null);
	}

	let (value, _) = Value::parse_str(text).map_err(|e| ParseError::Syntax(e.to_string()))?;

	if !depth_within(&value, MAX_DEPTH) {
		return Err(ParseError::TooDeep);
	}

	Ok(value)
}

/// Checks that no container nests deeper than `limit` levels.
fn depth_within(value: &Value, limit: usize) -> bool {
	match value {
		Value::Array(items) => {
			limit > 0 && items.iter().all(|item| depth_within(item, limit - 1))
		}
		Value::Object(object) => {
			limit > 0
				&& object
					.entries()
					.iter()
					.all(|entry| depth_within(&entry.value, limit - 1))
		}
		_ => true,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use json_syntax::json;

	#[test]
	fn empty_document_is_null() {
		assert_eq!(parse(b"").unwrap(), Value::Null);
		assert_eq!(parse(b"  \n\t ").unwrap(), Value::Null);
	}

	#[test]
	fn decodes_objects() {
		assert_eq!(
			parse(br#"{"a": [1, null, "b/c"]}"#).unwrap(),
			json!({"a": [1, null, "b/c"]})
		);
	}

	#[test]
	fn rejects_invalid_utf8() {
		assert!(matches!(
			parse(b"\"\xff\""),
			Err(ParseError::InvalidUtf8(_))
		));
	}

	#[test]
	fn rejects_malformed_input() {
		assert!(matches!(parse(b"{"), Err(ParseError::Syntax(_))));
	}

	#[test]
	fn rejects_excessive_nesting() {
		let document = format!("{}{}", "[".repeat(MAX_DEPTH + 1), "]".repeat(MAX_DEPTH + 1));
		assert!(matches!(
			parse(document.as_bytes()),
			Err(ParseError::TooDeep)
		));

		let document = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
		assert!(parse(document.as_bytes()).is_ok());
	}
}
