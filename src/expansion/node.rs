use super::{expand_array, expand_element, expand_iri, expand_value};
use crate::object::is_list_object;
use crate::util::{add_value, entry_of, has_entry};
use crate::{
	is_keyword, ContainerKind, Context, Error, Keyword, Process, SyntaxError, SyntaxErrorKind,
};
use json_syntax::{object::Entry, Object, Value};
use mown::Mown;

/// Expands an object.
///
/// An embedded `@context` is folded into the active context first and
/// applies to this object and everything below it. Each remaining entry is
/// then expanded under its IRI-expanded key, and the resulting object goes
/// through a final shape pass.
pub(crate) fn expand_node(
	active_context: &Context,
	active_property: Option<&str>,
	element: &Object,
) -> Result<Value, Error> {
	let mut active_context = Mown::Borrowed(active_context);

	if let Some(local_context) = element.get_unique("@context").map_err(|_| {
		SyntaxError::new(
			SyntaxErrorKind::DuplicateKey(Keyword::Context),
			&Value::Object(element.clone()),
		)
	})? {
		active_context = Mown::Owned(local_context.process(active_context.as_ref())?);
	}

	let mut result = Object::new();

	for Entry { key, value } in element.entries() {
		let term = key.as_str();
		if term == "@context" {
			continue;
		}

		let expanded_key = expand_iri(active_context.as_ref(), term, false);

		// Null values are dropped, except under `@value`.
		if value.is_null() && expanded_key != "@value" {
			continue;
		}

		// Unmapped terms are dropped.
		if !is_keyword(&expanded_key) && !expanded_key.contains(':') {
			continue;
		}

		let duplicate = |keyword| {
			Error::Syntax(SyntaxError::new(
				SyntaxErrorKind::DuplicateKey(keyword),
				&Value::Object(element.clone()),
			))
		};

		match Keyword::try_from(expanded_key.as_str()) {
			Ok(Keyword::Id) => {
				if has_entry(&result, "@id") {
					return Err(duplicate(Keyword::Id));
				}
				let Value::String(id) = value else {
					return Err(SyntaxError::new(SyntaxErrorKind::InvalidIdValue, value).into());
				};
				result.insert(
					"@id".into(),
					Value::String(
						expand_iri(active_context.as_ref(), id.as_str(), true)
							.as_str()
							.into(),
					),
				);
			}
			Ok(Keyword::Type) => {
				if has_entry(&result, "@type") {
					return Err(duplicate(Keyword::Type));
				}
				match value {
					Value::String(typ) => {
						result.insert(
							"@type".into(),
							Value::String(
								expand_iri(active_context.as_ref(), typ.as_str(), true)
									.as_str()
									.into(),
							),
						);
					}
					Value::Array(types) => {
						let mut expanded_types = Vec::with_capacity(types.len());
						for typ in types {
							if let Value::String(typ) = typ {
								let expanded =
									expand_iri(active_context.as_ref(), typ.as_str(), true);
								if !expanded.is_empty() {
									expanded_types.push(Value::String(expanded.as_str().into()));
								}
							}
						}
						result.insert("@type".into(), Value::Array(expanded_types));
					}
					_ => {
						return Err(
							SyntaxError::new(SyntaxErrorKind::InvalidTypeValue, value).into()
						)
					}
				}
			}
			Ok(keyword @ (Keyword::Value | Keyword::Language)) => {
				if has_entry(&result, keyword.into_str()) {
					return Err(duplicate(keyword));
				}
				if matches!(value, Value::Object(_) | Value::Array(_)) {
					let kind = match keyword {
						Keyword::Value => SyntaxErrorKind::InvalidValueObjectValue,
						_ => SyntaxErrorKind::InvalidLanguageTaggedString,
					};
					return Err(SyntaxError::new(kind, value).into());
				}
				result.insert(keyword.into_str().into(), value.clone());
			}
			Ok(keyword @ (Keyword::List | Keyword::Set)) => {
				if has_entry(&result, keyword.into_str()) {
					return Err(duplicate(keyword));
				}
				let items = Value::force_as_array(value);
				let expanded =
					expand_array(active_context.as_ref(), active_property, items)?;
				if keyword == Keyword::List && expanded.iter().any(is_list_object) {
					return Err(SyntaxError::new(SyntaxErrorKind::ListOfLists, value).into());
				}
				result.insert(keyword.into_str().into(), Value::Array(expanded));
			}
			Ok(Keyword::Container | Keyword::Context) => {
				// No meaning outside a context definition; dropped.
			}
			Err(_) => {
				let expanded = if matches!(value, Value::Object(_) | Value::Array(_)) {
					expand_element(active_context.as_ref(), Some(term), value)?
				} else {
					expand_value(active_context.as_ref(), Some(term), value)?
				};
				if expanded.is_null() {
					continue;
				}

				let has_list_container = active_context.as_ref().container_of(Some(term))
					== Some(ContainerKind::List);
				let expanded = if has_list_container && !is_list_object(&expanded) {
					let items = match expanded {
						Value::Array(items) => items,
						other => vec![other],
					};
					if items.iter().any(is_list_object) {
						return Err(
							SyntaxError::new(SyntaxErrorKind::ListOfLists, value).into()
						);
					}
					let mut list = Object::new();
					list.insert("@list".into(), Value::Array(items));
					Value::Array(vec![Value::Object(list)])
				} else {
					expanded
				};

				add_value(&mut result, &expanded_key, expanded);
			}
		}
	}

	finalize_node(result, element)
}

/// Shape pass over a freshly expanded object.
fn finalize_node(mut result: Object, element: &Object) -> Result<Value, Error> {
	let error = |kind| {
		Error::Syntax(SyntaxError::new(kind, &Value::Object(element.clone())))
	};

	if let Some(value) = entry_of(&result, "@value").cloned() {
		// The companion of `@value` is a single `@type` IRI or a
		// `@language` tag, never both.
		let has_type = match entry_of(&result, "@type") {
			Some(Value::String(_)) => true,
			Some(_) => return Err(error(SyntaxErrorKind::InvalidTypeValue)),
			None => false,
		};
		let has_language = has_entry(&result, "@language");
		if has_type && has_language {
			return Err(error(SyntaxErrorKind::InvalidValueObject));
		}
		if result.len() > 1 + usize::from(has_type) + usize::from(has_language) {
			return Err(error(SyntaxErrorKind::InvalidValueObject));
		}

		if value.is_null() {
			return Ok(Value::Null);
		}
		if result.len() == 1 {
			return Ok(value);
		}
		return Ok(Value::Object(result));
	}

	// A language tag alone carries no data.
	if result.len() == 1 && has_entry(&result, "@language") {
		return Ok(Value::Null);
	}
	result.remove_unique("@language").ok();

	if let Some(Value::String(_)) = entry_of(&result, "@type") {
		if let Ok(Some(Entry { key, value })) = result.remove_unique("@type") {
			result.insert(key, Value::Array(vec![value]));
		}
	}

	let has_list = has_entry(&result, "@list");
	let has_set = has_entry(&result, "@set");
	if (has_list || has_set) && result.len() > 1 {
		return Err(error(SyntaxErrorKind::InvalidSetOrListObject));
	}
	if has_set {
		if let Ok(Some(Entry { value, .. })) = result.remove_unique("@set") {
			return Ok(value);
		}
	}

	Ok(Value::Object(result))
}
