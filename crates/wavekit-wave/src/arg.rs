//! Argument dispatch for tag calls.
//!
//! A tag call accepts either `(attributes, child)` or just `(child)`. The
//! first position is therefore ambiguous; [`Arg`] holds whatever was passed
//! there and [`Arg::is_attributes`] is the single rule that decides how it is
//! used.

use crate::attributes::Attributes;
use crate::child::{Child, IntoChild};

/// The value passed in first position of a tag call.
#[derive(Debug)]
pub enum Arg<'a> {
	/// A structured mapping: applied as attributes.
	Attributes(Attributes),
	/// Any other shape: used as leading child content.
	Child(Child<'a>),
}

impl Default for Arg<'_> {
	fn default() -> Self {
		Arg::Child(Child::Empty)
	}
}

impl<'a> Arg<'a> {
	/// Returns `true` if the argument is treated as attributes.
	///
	/// Only a structured, non-sequence, non-callable value qualifies.
	/// Strings, callbacks, elements, sequences and absent values are child
	/// content.
	pub fn is_attributes(&self) -> bool {
		matches!(self, Arg::Attributes(_))
	}

	/// Splits the argument into its attributes and leading child content.
	pub fn resolve(self) -> (Option<Attributes>, Child<'a>) {
		match self {
			Arg::Attributes(attributes) => (Some(attributes), Child::Empty),
			Arg::Child(child) => (None, child),
		}
	}
}

impl<'a, T: IntoChild<'a>> From<T> for Arg<'a> {
	fn from(child: T) -> Self {
		Arg::Child(child.into_child())
	}
}

impl From<Attributes> for Arg<'_> {
	fn from(attributes: Attributes) -> Self {
		Arg::Attributes(attributes)
	}
}

/// Conversion of tag-method arguments into `(first, child)`.
///
/// | Passed | First | Child |
/// |--------|-------|-------|
/// | `()` or any child | that child | empty |
/// | `Attributes` | attributes | empty |
/// | `(Attributes, child)` | attributes | child |
/// | `(child, child)` | first child | second child |
pub trait IntoArgs<'a> {
	/// Performs the conversion.
	fn into_args(self) -> (Arg<'a>, Child<'a>);
}

impl<'a, T: IntoChild<'a>> IntoArgs<'a> for T {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::Child(self.into_child()), Child::Empty)
	}
}

impl<'a> IntoArgs<'a> for Attributes {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::Attributes(self), Child::Empty)
	}
}

impl<'a> IntoArgs<'a> for Arg<'a> {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(self, Child::Empty)
	}
}

impl<'a, C: IntoChild<'a>> IntoArgs<'a> for (Attributes, C) {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::Attributes(self.0), self.1.into_child())
	}
}

impl<'a, A: IntoChild<'a>, C: IntoChild<'a>> IntoArgs<'a> for (A, C) {
	fn into_args(self) -> (Arg<'a>, Child<'a>) {
		(Arg::Child(self.0.into_child()), self.1.into_child())
	}
}
