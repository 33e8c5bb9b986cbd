//! # WaveKit
//!
//! Build static HTML sites in Rust.
//!
//! This facade re-exports the WaveKit crates behind feature flags, so an
//! application depends on `wavekit` alone and enables what it needs.
//!
//! ## Feature Flags
//!
//! - `wave` (default) - the fluent HTML tree builder
//! - `json` - `serde_json` values as builder arguments
//! - `full` - all features enabled
//!
//! ## Quick Example
//!
//! ```
//! use wavekit::prelude::*;
//!
//! let nav = wave().nav(scope(|nav| {
//! 	nav.a((attrs! { "href" => "/" }, "Home"))
//! 		.a((attrs! { "href" => "/about" }, "About"));
//! }));
//!
//! assert_eq!(
//! 	nav.render(),
//! 	r#"<nav><a href="/">Home</a><a href="/about">About</a></nav>"#
//! );
//! ```

#[cfg(feature = "wave")]
pub mod wave;

/// Commonly used types, importable with `use wavekit::prelude::*`.
pub mod prelude {
	#[cfg(feature = "wave")]
	pub use crate::wave::prelude::*;
}
