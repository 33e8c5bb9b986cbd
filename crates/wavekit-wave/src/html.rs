//! Tag-named builder methods.
//!
//! Every tag in the list below gets a method of the same name on both
//! [`Wave`] and [`Element`]. A method takes one argument convertible through
//! [`IntoArgs`], so the usual call shapes read naturally:
//!
//! ```
//! use wavekit_wave::{Element, attrs, wave};
//!
//! wave().br(());
//! wave().p("text");
//! wave().input(attrs! { "disabled" => true });
//! wave().button((attrs! { "type" => "submit" }, "Submit"));
//! wave().form(|form: &Element| {
//! 	form.input(attrs! { "name" => "username" });
//! });
//! ```
//!
//! Tags outside the list are reached through `tag` or `construct`; the
//! vocabulary is open.

use crate::Wave;
use crate::arg::IntoArgs;
use crate::element::Element;

/// Defines the tag methods on [`Wave`] and [`Element`], plus [`KNOWN_TAGS`].
macro_rules! define_elements {
	($($(#[$meta:meta])* $name:ident => $tag:literal),* $(,)?) => {
		/// Every tag name that has a generated builder method.
		pub const KNOWN_TAGS: &[&str] = &[$($tag),*];

		impl Wave {
			$(
				#[doc = concat!("Builds a `<", $tag, ">` element.")]
				$(#[$meta])*
				pub fn $name<'a>(&self, args: impl IntoArgs<'a>) -> Element {
					self.tag($tag, args)
				}
			)*
		}

		impl Element {
			$(
				#[doc = concat!("Builds a `<", $tag, ">` element relative to this one.")]
				$(#[$meta])*
				pub fn $name<'a>(&self, args: impl IntoArgs<'a>) -> Element {
					self.tag($tag, args)
				}
			)*
		}
	};
}

define_elements! {
	// ============================================================================
	// Document metadata and root
	// ============================================================================
	html => "html",
	head => "head",
	title => "title",
	base => "base",
	link => "link",
	meta => "meta",
	style => "style",
	body => "body",

	// ============================================================================
	// Content sectioning
	// ============================================================================
	address => "address",
	article => "article",
	aside => "aside",
	footer => "footer",
	header => "header",
	h1 => "h1",
	h2 => "h2",
	h3 => "h3",
	h4 => "h4",
	h5 => "h5",
	h6 => "h6",
	hgroup => "hgroup",
	/// The dominant content of the document body.
	main => "main",
	nav => "nav",
	section => "section",
	search => "search",

	// ============================================================================
	// Text content
	// ============================================================================
	blockquote => "blockquote",
	dd => "dd",
	div => "div",
	dl => "dl",
	dt => "dt",
	figcaption => "figcaption",
	figure => "figure",
	hr => "hr",
	li => "li",
	menu => "menu",
	ol => "ol",
	p => "p",
	pre => "pre",
	ul => "ul",

	// ============================================================================
	// Inline text semantics
	// ============================================================================
	a => "a",
	abbr => "abbr",
	b => "b",
	bdi => "bdi",
	bdo => "bdo",
	br => "br",
	cite => "cite",
	code => "code",
	data => "data",
	dfn => "dfn",
	em => "em",
	i => "i",
	kbd => "kbd",
	mark => "mark",
	q => "q",
	s => "s",
	samp => "samp",
	small => "small",
	span => "span",
	strong => "strong",
	sub => "sub",
	sup => "sup",
	time => "time",
	u => "u",
	var => "var",
	wbr => "wbr",

	// ============================================================================
	// Image and multimedia
	// ============================================================================
	area => "area",
	audio => "audio",
	img => "img",
	map => "map",
	track => "track",
	video => "video",

	// ============================================================================
	// Embedded content
	// ============================================================================
	embed => "embed",
	iframe => "iframe",
	object => "object",
	picture => "picture",
	source => "source",
	svg => "svg",
	canvas => "canvas",

	// ============================================================================
	// Scripting
	// ============================================================================
	noscript => "noscript",
	script => "script",

	// ============================================================================
	// Demarcating edits
	// ============================================================================
	del => "del",
	ins => "ins",

	// ============================================================================
	// Table content
	// ============================================================================
	caption => "caption",
	col => "col",
	colgroup => "colgroup",
	table => "table",
	tbody => "tbody",
	td => "td",
	tfoot => "tfoot",
	th => "th",
	thead => "thead",
	tr => "tr",

	// ============================================================================
	// Forms
	// ============================================================================
	button => "button",
	datalist => "datalist",
	fieldset => "fieldset",
	form => "form",
	input => "input",
	label => "label",
	legend => "legend",
	meter => "meter",
	optgroup => "optgroup",
	option => "option",
	output => "output",
	progress => "progress",
	select => "select",
	textarea => "textarea",

	// ============================================================================
	// Interactive elements
	// ============================================================================
	details => "details",
	dialog => "dialog",
	summary => "summary",

	// ============================================================================
	// Web components
	// ============================================================================
	/// Holds markup that is not rendered until instantiated by script.
	template => "template",
}
