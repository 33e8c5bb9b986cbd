//! The element node and its composition rules.
//!
//! An [`Element`] is created by every tag call. Its tag, attributes and
//! normalized content are fixed at construction; what happens next depends on
//! the receiver of the call:
//!
//! | Receiver | Result |
//! |----------|--------|
//! | [`Wave`](crate::Wave) root | standalone element, empty chain |
//! | concrete element | sibling chained after the receiver |
//! | context carrier (empty tag) | subtree appended to the carrier's scope, carrier returned |
//!
//! ## Example
//!
//! ```
//! use wavekit_wave::{Element, wave};
//!
//! let page = wave().div(|div: &Element| {
//! 	div.p("First").p("Second");
//! });
//! assert_eq!(page.render(), "<div><p>First</p><p>Second</p></div>");
//!
//! let siblings = wave().li("A").li("B");
//! assert_eq!(siblings.render(), "<li>A</li><li>B</li>");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::io;

use crate::arg::{Arg, IntoArgs};
use crate::attributes::Attributes;
use crate::child::{Child, IntoChild, normalize_into};
use crate::composition::{Chain, Composition, Mode, Scope};
use crate::error::Result;

/// One constructed element, or a context carrier.
#[derive(Debug, Clone)]
pub struct Element {
	/// Tag name; empty for a context carrier.
	tag: Cow<'static, str>,
	attributes: Attributes,
	/// Normalized children. Carriers keep their output in the scope instead.
	content: String,
	composition: Composition,
}

impl Element {
	/// Builds an element from already dispatched arguments.
	///
	/// An empty tag produces a context carrier. Its scope is seeded with
	/// whatever the composition already carries, followed by the content.
	pub(crate) fn build(
		tag: Cow<'static, str>,
		first: Arg<'_>,
		child: Child<'_>,
		composition: Composition,
	) -> Element {
		let (attributes, leading) = first.resolve();
		let mut content = String::new();
		normalize_into(leading, &mut content);
		normalize_into(child, &mut content);

		if tag.is_empty() {
			let mut seed = String::new();
			if let Composition::Chained(chain) = &composition {
				chain.render_into(&mut seed);
			}
			seed.push_str(&content);
			return Element {
				tag,
				attributes: attributes.unwrap_or_default(),
				content: String::new(),
				composition: Composition::Scoped(Scope::seeded(seed)),
			};
		}

		Element {
			tag,
			attributes: attributes.unwrap_or_default(),
			content,
			composition,
		}
	}

	/// Creates an empty context carrier with a fresh scope.
	pub(crate) fn carrier() -> Element {
		Element {
			tag: Cow::Borrowed(""),
			attributes: Attributes::default(),
			content: String::new(),
			composition: Composition::Scoped(Scope::default()),
		}
	}

	/// Constructs `tag` relative to this element.
	///
	/// `first` is dispatched by [`Arg::resolve`]: attributes are applied,
	/// anything else becomes leading child content, followed by `child`.
	///
	/// On a context carrier the new element is appended to the carrier's
	/// scope and the carrier itself is returned, so further calls keep
	/// appending. On a concrete element the new element is chained after
	/// this one.
	pub fn construct<'a>(
		&self,
		tag: impl Into<Cow<'static, str>>,
		first: impl Into<Arg<'a>>,
		child: impl IntoChild<'a>,
	) -> Element {
		let tag = tag.into();
		let first = first.into();
		let child = child.into_child();

		if let Composition::Scoped(scope) = &self.composition {
			tracing::trace!(tag = %tag, mode = "scoped", "constructing element");
			let element = Element::build(tag, first, child, Composition::Standalone);
			scope.append_with(|current| element.render_into(current));
			return self.clone();
		}

		tracing::trace!(tag = %tag, mode = "chained", "constructing element");
		let chain = match &self.composition {
			Composition::Chained(chain) => chain.clone(),
			_ => Chain::default(),
		};
		let mut markup = String::new();
		self.markup_into(&mut markup);
		Element::build(tag, first, child, Composition::Chained(chain.push(markup)))
	}

	/// Constructs an element by tag name, with the arguments of a tag method.
	///
	/// This reaches tags that have no generated method:
	///
	/// ```
	/// use wavekit_wave::{attrs, wave};
	///
	/// let icon = wave().tag("my-icon", attrs! { "name" => "wave" });
	/// assert_eq!(icon.render(), r#"<my-icon name="wave"></my-icon>"#);
	/// ```
	pub fn tag<'a>(&self, name: impl Into<Cow<'static, str>>, args: impl IntoArgs<'a>) -> Element {
		let (first, child) = args.into_args();
		self.construct(name, first, child)
	}

	/// Returns the tag name, empty for a context carrier.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attributes
	}

	/// Returns the normalized child markup of a concrete element.
	pub fn content(&self) -> &str {
		&self.content
	}

	/// Returns `true` if this element is a context carrier.
	pub fn is_carrier(&self) -> bool {
		self.tag.is_empty()
	}

	/// Returns the composition mode of this element.
	pub fn mode(&self) -> Mode {
		self.composition.mode()
	}

	/// Serializes the element together with everything accumulated before it.
	///
	/// Rendering is idempotent and never changes shared state.
	pub fn render(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	/// Appends the serialization to `output`.
	pub fn render_into(&self, output: &mut String) {
		match &self.composition {
			Composition::Scoped(scope) => scope.render_into(output),
			Composition::Chained(chain) => {
				tracing::trace!(siblings = chain.len(), "rendering chained element");
				chain.render_into(output);
				self.markup_into(output);
			}
			Composition::Standalone => self.markup_into(output),
		}
	}

	/// Writes the serialization into a formatter sink.
	pub fn render_to<W: fmt::Write>(&self, sink: &mut W) -> Result<()> {
		sink.write_str(&self.render())?;
		Ok(())
	}

	/// Writes the serialization into a byte sink.
	pub fn write_to<W: io::Write>(&self, sink: &mut W) -> Result<()> {
		sink.write_all(self.render().as_bytes())?;
		Ok(())
	}

	/// Appends this element's own markup, without chained siblings.
	fn markup_into(&self, output: &mut String) {
		if self.is_carrier() {
			if let Composition::Scoped(scope) = &self.composition {
				scope.render_into(output);
			}
			return;
		}
		output.push('<');
		output.push_str(&self.tag);
		let start = output.len();
		output.push(' ');
		self.attributes.render_into(output);
		if output.len() == start + 1 {
			output.truncate(start);
		}
		output.push('>');
		output.push_str(&self.content);
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl From<Element> for String {
	fn from(element: Element) -> Self {
		element.render()
	}
}
