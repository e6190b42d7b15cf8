//! Small object helpers shared across the algorithms.
use json_syntax::{object::Entry, Object, Value};

/// Returns the first value bound to `key`.
///
/// Duplicate entries make the binding unusable and are treated as absent;
/// call sites that must reject duplicates check for them explicitly.
pub(crate) fn entry_of<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
	object.get_unique(key).ok().flatten()
}

/// Checks if `object` binds `key`.
pub(crate) fn has_entry(object: &Object, key: &str) -> bool {
	entry_of(object, key).is_some()
}

/// Merges `value` into the `key` entry of `map`, coercing the binding to an
/// array. Array values are spliced in element by element.
pub(crate) fn add_value(map: &mut Object, key: &str, value: Value) {
	match entry_of(map, key) {
		None => {
			map.insert(key.into(), Value::Array(Vec::new()));
		}
		Some(Value::Array(_)) => (),
		Some(_) => {
			if let Ok(Some(Entry { key, value: current })) = map.remove_unique(key) {
				map.insert(key, Value::Array(vec![current]));
			}
		}
	}

	if let Some(Value::Array(target)) = map.get_unique_mut(key).ok().flatten() {
		match value {
			Value::Array(items) => target.extend(items),
			value => target.push(value),
		}
	}
}
