use json_syntax::{json, Value};
use treeld::{Compact, Context, Error, Expand, Process, SyntaxErrorKind};

fn context(local: Value) -> Context {
	local.process(&Context::default()).unwrap()
}

#[test]
fn terms_shorten_back() {
	let context = context(json!({"name": "http://schema.org/name"}));

	assert_eq!(
		json!({"http://schema.org/name": [{"@value": "A"}]})
			.compact(&context)
			.unwrap(),
		json!({"name": "A"})
	);
}

#[test]
fn matching_datatypes_fold_to_the_literal() {
	let context = context(json!({
		"age": {"@id": "ex:age", "@type": "xsd:int"},
		"ex": "http://e/",
		"xsd": "http://w/"
	}));

	assert_eq!(
		json!({"http://e/age": [{"@value": 30, "@type": "http://w/int"}]})
			.compact(&context)
			.unwrap(),
		json!({"age": 30})
	);
}

#[test]
fn identifier_coercion_folds_to_the_identifier() {
	let context = context(json!({
		"knows": {"@id": "ex:knows", "@type": "@id"},
		"ex": "http://e/"
	}));

	assert_eq!(
		json!({"http://e/knows": [{"@id": "http://p/bob"}]})
			.compact(&context)
			.unwrap(),
		json!({"knows": "http://p/bob"})
	);
}

#[test]
fn list_containers_collapse_list_objects() {
	let context = context(json!({
		"tags": {"@id": "ex:tags", "@container": "@list"},
		"ex": "http://e/"
	}));

	assert_eq!(
		json!({"http://e/tags": [{"@list": [{"@value": "x"}, {"@value": "y"}]}]})
			.compact(&context)
			.unwrap(),
		json!({"tags": ["x", "y"]})
	);
}

#[test]
fn type_values_shorten_to_the_exact_term() {
	// A term naming the whole IRI beats any prefix of it.
	let context = context(json!({
		"s": "http://schema.org/",
		"name": "http://schema.org/name"
	}));

	assert_eq!(
		json!({"@type": ["http://schema.org/name"]})
			.compact(&context)
			.unwrap(),
		json!({"@type": "name"})
	);
}

#[test]
fn singleton_arrays_unwrap() {
	let context = context(json!({"prop": "http://e/p"}));

	assert_eq!(
		json!({"http://e/p": [{"@value": "x"}]})
			.compact(&context)
			.unwrap(),
		json!({"prop": "x"})
	);
}

#[test]
fn set_containers_keep_arrays() {
	let context = context(json!({
		"prop": {"@id": "http://e/p", "@container": "@set"}
	}));

	assert_eq!(
		json!({"http://e/p": [{"@value": "x"}]})
			.compact(&context)
			.unwrap(),
		json!({"prop": ["x"]})
	);
}

#[test]
fn unmatched_lists_keep_their_wrapper() {
	let context = context(json!({"prop": "http://e/p"}));

	assert_eq!(
		json!({"http://e/p": [{"@list": [{"@value": "x"}]}]})
			.compact(&context)
			.unwrap(),
		json!({"prop": {"@list": ["x"]}})
	);
}

#[test]
fn matching_languages_fold_to_the_literal() {
	let context = context(json!({
		"title": {"@id": "http://e/t", "@language": "en"}
	}));

	assert_eq!(
		json!({"http://e/t": [{"@value": "x", "@language": "en"}]})
			.compact(&context)
			.unwrap(),
		json!({"title": "x"})
	);

	// A different language keeps the wrapper.
	assert_eq!(
		json!({"http://e/t": [{"@value": "x", "@language": "fr"}]})
			.compact(&context)
			.unwrap(),
		json!({"title": {"@value": "x", "@language": "fr"}})
	);
}

#[test]
fn lone_identifier_objects_shorten() {
	let context = context(json!({"me": "http://e/me"}));

	assert_eq!(
		json!({"@id": "http://e/me"}).compact(&context).unwrap(),
		json!({"@id": "me"})
	);
}

#[test]
fn optimize_shortens_through_prefixes() {
	let context = context(json!({
		"prop": "http://e/p",
		"xsd": "http://w/",
		"e": "http://e/"
	}));

	let expanded = json!({
		"http://e/p": [{"@value": 5, "@type": "http://w/int"}],
		"http://e/other": [{"@value": 1}]
	});

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({
			"prop": {"@value": 5, "@type": "http://w/int"},
			"http://e/other": 1
		})
	);

	assert_eq!(
		expanded.compact_with(&context, None, true).unwrap(),
		json!({
			"prop": {"@value": 5, "@type": "xsd:int"},
			"e:other": 1
		})
	);
}

#[test]
fn colliding_keys_merge_into_arrays() {
	let context = context(json!({"n": "http://e/n"}));
	let expanded =
		treeld::parse(br#"{"http://e/n": ["A"], "http://e/n": ["B"]}"#).unwrap();

	assert_eq!(
		expanded.compact(&context).unwrap(),
		json!({"n": ["A", "B"]})
	);
}

#[test]
fn malformed_value_objects_are_rejected() {
	let err = json!({"@value": 1, "@id": "http://e/x"})
		.compact(&Context::default())
		.unwrap_err();

	match err {
		Error::Syntax(e) => assert_eq!(*e.kind(), SyntaxErrorKind::InvalidValueObject),
		other => panic!("unexpected error: {other}"),
	}
}

#[test]
fn compaction_round_trips_to_a_fixed_point() {
	let mut context = context(json!({
		"name": "http://schema.org/name",
		"age": {"@id": "http://e/age", "@type": "http://w/int"},
		"knows": {"@id": "http://e/knows", "@type": "@id"},
		"tags": {"@id": "http://e/tags", "@container": "@list"}
	}));
	context.set_default_language(Some("en".into()));

	let documents = [
		json!({"name": "A"}),
		json!({"age": 30}),
		json!({"knows": "http://p/bob"}),
		json!({"tags": ["x", "y"]}),
		json!({
			"@id": "http://me",
			"name": "A",
			"age": 30,
			"knows": ["http://p/bob", "http://p/eve"],
			"tags": ["x"]
		}),
	];

	for document in documents {
		let expanded = document.expand(&context).unwrap();
		let compacted = expanded.compact(&context).unwrap();
		let reexpanded = compacted.expand(&context).unwrap();
		assert_eq!(reexpanded, expanded, "document: {document:?}");
	}
}
