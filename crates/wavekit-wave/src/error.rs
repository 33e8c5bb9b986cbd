//! Errors raised when markup leaves the builder.
//!
//! Building and rendering in memory cannot fail; only writing to an external
//! sink or decoding loosely typed input can.

use std::fmt;
use std::io;

/// Error type for sink and decoding operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WaveError {
	/// A `fmt::Write` sink refused output.
	#[error("Formatter error: {0}")]
	Fmt(#[from] fmt::Error),

	/// An `io::Write` sink failed.
	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	/// A JSON value other than an object was used as attributes.
	#[cfg(feature = "json")]
	#[error("Expected a JSON object for attributes, found {0}")]
	NotAnObject(String),
}

/// Result alias for fallible builder operations.
pub type Result<T> = std::result::Result<T, WaveError>;
