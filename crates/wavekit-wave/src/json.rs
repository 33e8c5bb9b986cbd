//! Dynamic arguments from `serde_json` values.
//!
//! Loosely typed input (configuration, fixtures, data fetched at build time)
//! goes through the same dispatch rule as typed arguments: an object is
//! attributes, anything else is child content.
//!
//! ```
//! use serde_json::json;
//! use wavekit_wave::wave;
//!
//! let link = wave().a((json!({ "href": "/docs", "hidden": false }), "Docs"));
//! assert_eq!(link.render(), r#"<a href="/docs">Docs</a>"#);
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::arg::{Arg, IntoArgs};
use crate::attributes::{AttrValue, Attributes};
use crate::child::{Child, IntoChild};
use crate::error::WaveError;

impl From<Value> for AttrValue {
	/// Booleans become flags and `null` is an omitted flag. Strings are used
	/// as is; numbers, arrays and objects render as their JSON text.
	fn from(value: Value) -> Self {
		match value {
			Value::Bool(on) => AttrValue::Flag(on),
			Value::Null => AttrValue::Flag(false),
			Value::String(text) => AttrValue::Text(text),
			other => AttrValue::Text(other.to_string()),
		}
	}
}

impl TryFrom<Value> for Attributes {
	type Error = WaveError;

	fn try_from(value: Value) -> Result<Self, Self::Error> {
		match value {
			Value::Object(map) => Ok(map.into_iter().collect()),
			other => Err(WaveError::NotAnObject(kind(&other).to_string())),
		}
	}
}

impl From<Value> for Arg<'_> {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Arg::Attributes(map.into_iter().collect()),
			other => Arg::Child(child_from_json(other)),
		}
	}
}

impl<'a> IntoArgs<'a> for Value {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::from(self), Child::Empty)
	}
}

impl<'a, C: IntoChild<'a>> IntoArgs<'a> for (Value, C) {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::from(self.0), self.1.into_child())
	}
}

/// Strings are text and arrays are lists; every other value has nothing to
/// render.
fn child_from_json<'a>(value: Value) -> Child<'a> {
	match value {
		Value::String(text) => text.into_child(),
		Value::Array(items) => Child::List(items.into_iter().map(child_from_json).collect()),
		_ => Child::Empty,
	}
}

fn kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

impl Serialize for Attributes {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (name, value) in self.iter() {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
	type Value = Attributes;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("a map of attribute names to values")
	}

	fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
		let mut attributes = Attributes::new();
		while let Some((name, value)) = access.next_entry::<String, Value>()? {
			attributes.insert(name, value);
		}
		Ok(attributes)
	}
}

impl<'de> Deserialize<'de> for Attributes {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		deserializer.deserialize_map(AttributesVisitor)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{attrs, wave};
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_object_dispatches_as_attributes() {
		// Arrange
		let arg = Arg::from(json!({ "open": true, "class": "flex" }));

		// Act & Assert
		assert!(arg.is_attributes());
		let (attributes, _) = arg.resolve();
		assert_eq!(attributes, Some(attrs! { "open" => true, "class" => "flex" }));
	}

	#[rstest]
	#[case(json!("text"), "<p>text</p>")]
	#[case(json!(["a", ["b", "c"]]), "<p>abc</p>")]
	#[case(json!(null), "<p></p>")]
	#[case(json!(42), "<p></p>")]
	#[case(json!(true), "<p></p>")]
	fn test_non_objects_dispatch_as_child(#[case] value: Value, #[case] expected: &str) {
		// Act
		let element = wave().p(value);

		// Assert
		assert_eq!(element.render(), expected);
	}

	#[rstest]
	fn test_attribute_value_conversion() {
		// Arrange
		let value = json!({
			"tabindex": 2,
			"hidden": null,
			"data-props": { "a": 1 },
			"checked": true,
		});

		// Act
		let attributes = Attributes::try_from(value).unwrap();

		// Assert
		assert_eq!(attributes.get("tabindex"), Some(&AttrValue::from("2")));
		assert_eq!(attributes.get("hidden"), Some(&AttrValue::Flag(false)));
		assert_eq!(attributes.get("data-props"), Some(&AttrValue::from(r#"{"a":1}"#)));
		assert_eq!(attributes.get("checked"), Some(&AttrValue::Flag(true)));
	}

	#[rstest]
	fn test_non_object_is_rejected() {
		// Act
		let result = Attributes::try_from(json!(["class", "flex"]));

		// Assert
		let error = result.unwrap_err();
		assert!(matches!(error, WaveError::NotAnObject(ref kind) if kind == "array"));
	}

	#[rstest]
	fn test_serialize_keeps_insertion_order() {
		// Arrange
		let attributes = attrs! { "type" => "checkbox", "name" => "agree", "checked" => true };

		// Act
		let serialized = serde_json::to_string(&attributes).unwrap();

		// Assert
		assert_eq!(serialized, r#"{"type":"checkbox","name":"agree","checked":true}"#);
	}

	#[rstest]
	fn test_deserialize_keeps_document_order() {
		// Act
		let attributes: Attributes =
			serde_json::from_str(r#"{"z":"last","a":"first","off":false}"#).unwrap();

		// Assert
		assert_eq!(attributes.render(), r#"z="last" a="first""#);
	}
}
