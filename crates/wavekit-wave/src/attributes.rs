//! Element attributes.
//!
//! Attributes are kept in insertion order so rendered markup is
//! deterministic. Keys are unique: inserting an existing key replaces its
//! value but keeps the position of the first insertion.
//!
//! ## Example
//!
//! ```
//! use wavekit_wave::{Attributes, attrs};
//!
//! let a = attrs! { "name" => "username", "required" => true };
//! let b = Attributes::new().attr("name", "username").flag("required", true);
//!
//! assert_eq!(a, b);
//! assert_eq!(a.render(), r#"name="username" required"#);
//! ```

use std::fmt;

/// The value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum AttrValue {
	/// Boolean flag: `true` renders a bare name, `false` omits the attribute.
	Flag(bool),
	/// Quoted value, rendered verbatim.
	Text(String),
}

impl AttrValue {
	/// Returns `true` if this value produces no output.
	pub fn is_omitted(&self) -> bool {
		matches!(self, AttrValue::Flag(false))
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Flag(value)
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(value.to_owned())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(value.clone())
	}
}

macro_rules! impl_display_value {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Text(value.to_string())
				}
			}
		)*
	};
}

impl_display_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char);

/// Ordered, unique-keyed attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: Vec<(String, AttrValue)>,
}

impl Attributes {
	/// Creates an empty attribute map.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an attribute, builder style.
	///
	/// Setting the same name twice overwrites the earlier value in place.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(name, value);
		self
	}

	/// Adds a boolean attribute, builder style.
	pub fn flag(self, name: impl Into<String>, on: bool) -> Self {
		self.attr(name, on)
	}

	/// Inserts an attribute, returning the value it replaced.
	pub fn insert(
		&mut self,
		name: impl Into<String>,
		value: impl Into<AttrValue>,
	) -> Option<AttrValue> {
		let name = name.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(key, _)| *key == name) {
			Some((_, slot)) => Some(std::mem::replace(slot, value)),
			None => {
				self.entries.push((name, value));
				None
			}
		}
	}

	/// Looks up an attribute by name.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value)
	}

	/// Iterates over the attributes in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries
			.iter()
			.map(|(key, value)| (key.as_str(), value))
	}

	/// Number of stored attributes, including omitted flags.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if no attribute is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Renders the attribute list without the leading space.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Appends the rendered attribute list to `output`.
	///
	/// Each rendered attribute is separated by a single space. Nothing is
	/// written when every attribute is omitted. Values are not escaped.
	pub fn render_into(&self, output: &mut String) {
		let mut first = true;
		for (name, value) in &self.entries {
			if value.is_omitted() {
				continue;
			}
			if !first {
				output.push(' ');
			}
			first = false;
			output.push_str(name);
			if let AttrValue::Text(text) = value {
				output.push_str("=\"");
				output.push_str(text);
				output.push('"');
			}
		}
	}
}

impl fmt::Display for Attributes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Attributes::new();
		attributes.extend(iter);
		attributes
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl From<Vec<(String, AttrValue)>> for Attributes {
	fn from(entries: Vec<(String, AttrValue)>) -> Self {
		entries.into_iter().collect()
	}
}

impl From<Attributes> for Vec<(String, AttrValue)> {
	fn from(attributes: Attributes) -> Self {
		attributes.entries
	}
}

/// Builds [`Attributes`] from `name => value` pairs.
///
/// ```
/// use wavekit_wave::attrs;
///
/// let attributes = attrs! { "type" => "submit", "disabled" => false };
/// assert_eq!(attributes.render(), r#"type="submit""#);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {
		$crate::Attributes::new()$(.attr($name, $value))+
	};
}
