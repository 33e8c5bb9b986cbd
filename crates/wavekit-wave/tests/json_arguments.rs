//! JSON-driven argument tests
//!
//! Success Criteria:
//! 1. JSON objects dispatch as attributes, every other value as children
//! 2. Attribute maps built from data render like typed ones
//! 3. Attributes survive a serde round trip in order

use rstest::*;
use serde_json::{Value, json};
use wavekit_wave::{Arg, Attributes, WaveError, attrs, scope, wave};

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
fn nav_items() -> Value {
	json!([
		{ "href": "/", "label": "Home", "current": true },
		{ "href": "/docs", "label": "Docs", "current": false },
	])
}

// ============================================================================
// Dispatch Tests
// ============================================================================

#[rstest]
#[case(json!({}), true)]
#[case(json!({ "id": "x" }), true)]
#[case(json!(null), false)]
#[case(json!([]), false)]
#[case(json!("text"), false)]
#[case(json!(1), false)]
fn test_dispatch_predicate(#[case] value: Value, #[case] expected: bool) {
	assert_eq!(Arg::from(value).is_attributes(), expected);
}

/// Tests data-driven navigation built from a JSON document
#[rstest]
fn test_render_from_data(nav_items: Value) {
	// Arrange
	let items = nav_items.as_array().cloned().unwrap_or_default();

	// Act
	let nav = wave().ul(scope(|ul| {
		for item in &items {
			let label = item["label"].as_str().unwrap_or_default().to_string();
			let attributes = json!({
				"href": item["href"].clone(),
				"aria-current": item["current"].clone(),
			});
			ul.li(scope(move |li| li.a((attributes, label))));
		}
	}));

	// Assert
	assert_eq!(
		nav.render(),
		concat!(
			"<ul>",
			r#"<li><a href="/" aria-current>Home</a></li>"#,
			r#"<li><a href="/docs">Docs</a></li>"#,
			"</ul>",
		)
	);
}

/// Tests that object keys render in document order, not sorted
#[rstest]
fn test_object_keys_keep_document_order() {
	// Act
	let element = wave().div(json!({ "style": "a", "data-custom": "b", "class": "c" }));

	// Assert
	assert_eq!(
		element.render(),
		r#"<div style="a" data-custom="b" class="c"></div>"#
	);
}

/// Tests a JSON array of strings as children
#[rstest]
fn test_array_as_children() {
	// Act
	let element = wave().p(json!(["a", "b", ["c"]]));

	// Assert
	assert_eq!(element.render(), "<p>abc</p>");
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[rstest]
fn test_try_from_rejects_scalars() {
	// Act
	let result = Attributes::try_from(json!("class"));

	// Assert
	let error = result.unwrap_err();
	assert!(matches!(error, WaveError::NotAnObject(_)));
	assert_eq!(
		error.to_string(),
		"Expected a JSON object for attributes, found string"
	);
}

#[rstest]
fn test_serde_round_trip_preserves_order() {
	// Arrange
	let attributes = attrs! { "type" => "email", "name" => "contact", "required" => true };

	// Act
	let encoded = serde_json::to_string(&attributes).unwrap();
	let decoded: Attributes = serde_json::from_str(&encoded).unwrap();

	// Assert
	assert_eq!(decoded, attributes);
	assert_eq!(
		wave().input(decoded).render(),
		r#"<input type="email" name="contact" required></input>"#
	);
}
