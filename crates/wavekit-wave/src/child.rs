//! Child content and its normalization to markup.
//!
//! Every shape a caller may pass as children converts into [`Child`] through
//! [`IntoChild`], and [`normalize`] flattens a `Child` into a markup string.
//! Normalization is total: shapes with nothing to render become the empty
//! string instead of an error.

use std::borrow::Cow;
use std::fmt;

use crate::element::Element;

/// Boxed nested-callback body.
pub type Callback<'a> = Box<dyn FnOnce(&Element) + 'a>;

/// A child of an element, before normalization.
#[derive(Default)]
pub enum Child<'a> {
	/// Nothing to render.
	#[default]
	Empty,
	/// Literal markup, inserted verbatim.
	Text(Cow<'a, str>),
	/// A nested-callback scope. The callback receives a context carrier and
	/// issues tag calls on it.
	Callback(Callback<'a>),
	/// An already constructed element (or chain).
	Element(Element),
	/// An ordered sequence of children.
	List(Vec<Child<'a>>),
}

impl fmt::Debug for Child<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Child::Empty => f.write_str("Empty"),
			Child::Text(text) => f.debug_tuple("Text").field(text).finish(),
			Child::Callback(_) => f.write_str("Callback(<closure>)"),
			Child::Element(element) => f.debug_tuple("Element").field(element).finish(),
			Child::List(children) => f.debug_tuple("List").field(children).finish(),
		}
	}
}

impl<'a> Child<'a> {
	/// Wraps a nested-callback body.
	///
	/// The return value of `body` is discarded, so `|li| li.a(...)` works as
	/// well as a block of statements.
	pub fn scope<F, R>(body: F) -> Self
	where
		F: FnOnce(&Element) -> R + 'a,
	{
		Child::Callback(Box::new(move |carrier: &Element| {
			let _ = body(carrier);
		}))
	}

	/// Returns `true` for [`Child::Empty`].
	pub fn is_empty(&self) -> bool {
		matches!(self, Child::Empty)
	}
}

/// Shorthand for [`Child::scope`].
///
/// Passing a closure through `scope` lets the compiler infer the carrier
/// parameter type, so no annotation is needed:
///
/// ```
/// use wavekit_wave::{scope, wave};
///
/// let list = wave().ul(scope(|ul| {
/// 	ul.li("A").li("B");
/// }));
/// assert_eq!(list.render(), "<ul><li>A</li><li>B</li></ul>");
/// ```
pub fn scope<'a, F, R>(body: F) -> Child<'a>
where
	F: FnOnce(&Element) -> R + 'a,
{
	Child::scope(body)
}

/// Conversion into [`Child`].
///
/// Implemented for strings, elements, optional values, sequences and
/// closures taking `&Element`. A closure passed directly needs its parameter
/// annotated (`|div: &Element| ...`); use [`scope`] to avoid that.
pub trait IntoChild<'a> {
	/// Converts `self` into a child.
	fn into_child(self) -> Child<'a>;
}

impl<'a> IntoChild<'a> for Child<'a> {
	fn into_child(self) -> Child<'a> {
		self
	}
}

impl<'a> IntoChild<'a> for () {
	fn into_child(self) -> Child<'a> {
		Child::Empty
	}
}

impl<'a, 'b: 'a> IntoChild<'a> for &'b str {
	fn into_child(self) -> Child<'a> {
		Child::Text(Cow::Borrowed(self))
	}
}

impl<'a> IntoChild<'a> for String {
	fn into_child(self) -> Child<'a> {
		Child::Text(Cow::Owned(self))
	}
}

impl<'a, 'b: 'a> IntoChild<'a> for &'b String {
	fn into_child(self) -> Child<'a> {
		Child::Text(Cow::Borrowed(self.as_str()))
	}
}

impl<'a> IntoChild<'a> for Cow<'a, str> {
	fn into_child(self) -> Child<'a> {
		Child::Text(self)
	}
}

impl<'a> IntoChild<'a> for Element {
	fn into_child(self) -> Child<'a> {
		Child::Element(self)
	}
}

impl<'a> IntoChild<'a> for &Element {
	fn into_child(self) -> Child<'a> {
		Child::Element(self.clone())
	}
}

impl<'a, T: IntoChild<'a>> IntoChild<'a> for Option<T> {
	fn into_child(self) -> Child<'a> {
		match self {
			Some(child) => child.into_child(),
			None => Child::Empty,
		}
	}
}

impl<'a, T: IntoChild<'a>> IntoChild<'a> for Vec<T> {
	fn into_child(self) -> Child<'a> {
		Child::List(self.into_iter().map(IntoChild::into_child).collect())
	}
}

impl<'a, T: IntoChild<'a>, const N: usize> IntoChild<'a> for [T; N] {
	fn into_child(self) -> Child<'a> {
		Child::List(self.into_iter().map(IntoChild::into_child).collect())
	}
}

impl<'a, F, R> IntoChild<'a> for F
where
	F: FnOnce(&Element) -> R + 'a,
{
	fn into_child(self) -> Child<'a> {
		Child::scope(self)
	}
}

/// Normalizes a child into markup.
pub fn normalize(child: Child<'_>) -> String {
	let mut output = String::new();
	normalize_into(child, &mut output);
	output
}

/// Appends the normalized markup of `child` to `output`.
///
/// - a callback runs against a fresh context carrier, whose accumulated
///   output becomes the markup;
/// - text is copied verbatim, without escaping;
/// - a list is normalized element by element, in order;
/// - an element contributes its serialization;
/// - empty contributes nothing.
pub fn normalize_into(child: Child<'_>, output: &mut String) {
	match child {
		Child::Callback(body) => {
			let carrier = Element::carrier();
			tracing::trace!("entering nested scope");
			body(&carrier);
			let start = output.len();
			carrier.render_into(output);
			tracing::trace!(bytes = output.len() - start, "leaving nested scope");
		}
		Child::Text(text) => output.push_str(&text),
		Child::List(children) => {
			for child in children {
				normalize_into(child, output);
			}
		}
		Child::Element(element) => element.render_into(output),
		Child::Empty => {}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::wave;
	use rstest::rstest;

	#[rstest]
	fn test_normalize_text_is_verbatim() {
		assert_eq!(normalize("<b>&</b>".into_child()), "<b>&</b>");
	}

	#[rstest]
	fn test_normalize_empty_shapes() {
		// Arrange
		let absent: Option<&str> = None;

		// Act & Assert
		assert_eq!(normalize(absent.into_child()), "");
		assert_eq!(normalize(().into_child()), "");
		assert_eq!(normalize(Vec::<String>::new().into_child()), "");
		assert_eq!(normalize(Child::Empty), "");
	}

	#[rstest]
	fn test_normalize_nested_lists_flatten_in_order() {
		// Arrange
		let child = vec![
			Child::Text("a".into()),
			Child::List(vec![Child::Text("b".into()), Child::List(vec!["c".into_child()])]),
			"d".into_child(),
		];

		// Act
		let markup = normalize(child.into_child());

		// Assert
		assert_eq!(markup, "abcd");
	}

	#[rstest]
	fn test_normalize_callback_collects_carrier_output() {
		// Arrange
		let child = scope(|carrier| {
			carrier.p("one");
			carrier.p("two");
		});

		// Act
		let markup = normalize(child);

		// Assert
		assert_eq!(markup, "<p>one</p><p>two</p>");
	}

	#[rstest]
	fn test_normalize_callback_return_value_is_ignored() {
		// Arrange
		let child = scope(|carrier| carrier.span("kept"));

		// Act
		let markup = normalize(child);

		// Assert
		assert_eq!(markup, "<span>kept</span>");
	}

	#[rstest]
	fn test_normalize_element_uses_serialization() {
		// Arrange
		let element = wave().em("x");

		// Act
		let markup = normalize((&element).into_child());

		// Assert
		assert_eq!(markup, element.render());
	}

	#[rstest]
	fn test_annotated_closure_converts_to_callback() {
		// Arrange
		let child = (|carrier: &Element| {
			carrier.hr(());
		})
		.into_child();

		// Assert
		assert!(matches!(child, Child::Callback(_)));
		assert_eq!(normalize(child), "<hr></hr>");
	}
}
