//! # WaveKit Wave
//!
//! A fluent builder that produces HTML markup strings.
//!
//! Every tag is a method: calling it constructs an element, and the element
//! serializes to `<tag attrs>content</tag>`. Children may be text, other
//! elements, sequences, or a *nested callback* that receives a context
//! carrier and issues tag calls on it.
//!
//! ## Features
//!
//! - **Nesting**: children passed directly or through a callback are
//!   rendered inside the element.
//! - **Chaining**: calling a tag method on an element appends a sibling, so
//!   `wave().li("A").li("B")` renders both items.
//! - **Attributes**: an ordered map where `true` renders a bare name and
//!   `false` omits the attribute.
//! - **Open vocabulary**: tags without a generated method are reached via
//!   [`Element::tag`] or [`Element::construct`].
//!
//! Output is never escaped. Callers are responsible for the markup they
//! pass in.
//!
//! ## Example
//!
//! ```
//! use wavekit_wave::{attrs, scope, wave};
//!
//! let form = wave().form((
//! 	attrs! { "action" => "/login", "method" => "post" },
//! 	scope(|form| {
//! 		form.input(attrs! { "name" => "username", "required" => true });
//! 		form.button((attrs! { "type" => "submit" }, "Sign in"));
//! 	}),
//! ));
//!
//! assert_eq!(
//! 	form.render(),
//! 	concat!(
//! 		r#"<form action="/login" method="post">"#,
//! 		r#"<input name="username" required></input>"#,
//! 		r#"<button type="submit">Sign in</button>"#,
//! 		"</form>",
//! 	)
//! );
//! ```
//!
//! ## Feature flags
//!
//! - `json`: accept `serde_json::Value` as tag arguments and (de)serialize
//!   [`Attributes`].

mod arg;
mod attributes;
mod child;
mod composition;
mod element;
mod error;
mod html;
#[cfg(feature = "json")]
mod json;

use std::borrow::Cow;
use std::fmt;

pub use arg::{Arg, IntoArgs};
pub use attributes::{AttrValue, Attributes};
pub use child::{Callback, Child, IntoChild, normalize, normalize_into, scope};
pub use composition::Mode;
pub use element::Element;
pub use error::{Result, WaveError};
pub use html::KNOWN_TAGS;

use composition::Composition;

/// Re-exports for glob import.
pub mod prelude {
	pub use crate::{
		Attributes, AttrValue, Child, Element, IntoArgs, IntoChild, Wave, attrs, scope, wave,
	};
}

/// The builder entry point.
///
/// The root holds no state. Each tag call on it starts a new standalone
/// element, and the root itself renders as the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wave;

/// A root usable in `const` and `static` contexts.
pub const WAVE: Wave = Wave;

/// Returns the builder root.
pub fn wave() -> Wave {
	Wave
}

impl Wave {
	/// Constructs a standalone element.
	///
	/// An empty `tag` yields a context carrier holding the normalized
	/// children, to which further calls append.
	pub fn construct<'a>(
		&self,
		tag: impl Into<Cow<'static, str>>,
		first: impl Into<Arg<'a>>,
		child: impl IntoChild<'a>,
	) -> Element {
		let tag = tag.into();
		tracing::trace!(tag = %tag, mode = "standalone", "constructing element");
		Element::build(tag, first.into(), child.into_child(), Composition::Standalone)
	}

	/// Constructs a standalone element by tag name, with the arguments of a
	/// tag method.
	pub fn tag<'a>(&self, name: impl Into<Cow<'static, str>>, args: impl IntoArgs<'a>) -> Element {
		let (first, child) = args.into_args();
		self.construct(name, first, child)
	}

	/// Starts an empty context carrier for building a run of top-level
	/// siblings.
	///
	/// ```
	/// use wavekit_wave::wave;
	///
	/// let fragment = wave().fragment();
	/// fragment.meta(wavekit_wave::attrs! { "charset" => "utf-8" });
	/// fragment.title("Home");
	/// assert_eq!(fragment.render(), r#"<meta charset="utf-8"></meta><title>Home</title>"#);
	/// ```
	pub fn fragment(&self) -> Element {
		Element::carrier()
	}

	/// Renders the root, which is always empty.
	pub fn render(&self) -> String {
		String::new()
	}
}

impl fmt::Display for Wave {
	fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
		Ok(())
	}
}
