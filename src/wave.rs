//! Fluent HTML tree builder
//!
//! This module provides access to wavekit-wave. Every HTML tag is a method;
//! elements nest through child arguments or nested callbacks, and chain as
//! siblings when a tag method is called on an element.
//!
//! ## Example
//!
//! ```
//! use wavekit::wave::{Element, attrs, wave};
//!
//! let list = wave().ul(|ul: &Element| {
//! 	for item in ["One", "Two"] {
//! 		ul.li(item);
//! 	}
//! });
//!
//! assert_eq!(list.render(), "<ul><li>One</li><li>Two</li></ul>");
//! assert_eq!(wave().hr(attrs! { "hidden" => true }).render(), "<hr hidden></hr>");
//! ```

// Re-export all wavekit-wave functionality
pub use wavekit_wave::*;
