//! Composition state shared between sibling calls.
//!
//! Two accumulators exist, and they never mix:
//!
//! - [`Chain`] collects siblings chained on a concrete element
//!   (`wave().p("a").p("b")`). It is a persistent, append-only log. Every
//!   chaining step produces a new snapshot that shares all earlier links, so
//!   branching from an intermediate element cannot disturb other branches
//!   and rendering never mutates anything.
//! - [`Scope`] collects the output of calls issued on a context carrier
//!   inside a nested callback. It is mutable and shared by every handle to
//!   the same carrier, because a callback typically discards the values its
//!   calls return.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// How an element takes part in composition.
#[derive(Debug, Clone, Default)]
pub(crate) enum Composition {
	/// Self-contained element with nothing before it.
	#[default]
	Standalone,
	/// Element chained after the siblings recorded in the chain.
	Chained(Chain),
	/// Context carrier writing into a scope.
	Scoped(Scope),
}

/// Public view of an element's composition state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
	/// Nesting mode: the element owns no shared state.
	Standalone,
	/// Chaining mode, with the number of siblings rendered before this one.
	Chained {
		/// Siblings recorded ahead of the element.
		siblings: usize,
	},
	/// Context carrier of a nested-callback scope.
	Scoped,
}

impl Composition {
	pub(crate) fn mode(&self) -> Mode {
		match self {
			Composition::Standalone => Mode::Standalone,
			Composition::Chained(chain) => Mode::Chained {
				siblings: chain.len(),
			},
			Composition::Scoped(_) => Mode::Scoped,
		}
	}
}

struct Link {
	markup: String,
	prev: Option<Rc<Link>>,
}

/// Persistent log of rendered sibling markup, newest link first.
#[derive(Clone, Default)]
pub(crate) struct Chain {
	head: Option<Rc<Link>>,
	len: usize,
}

impl Chain {
	/// Returns a new snapshot with `markup` appended after every recorded
	/// sibling. `self` is left untouched.
	pub(crate) fn push(&self, markup: String) -> Chain {
		Chain {
			head: Some(Rc::new(Link {
				markup,
				prev: self.head.clone(),
			})),
			len: self.len + 1,
		}
	}

	pub(crate) fn len(&self) -> usize {
		self.len
	}

	/// Appends every recorded sibling, oldest first.
	pub(crate) fn render_into(&self, output: &mut String) {
		let mut links = Vec::with_capacity(self.len);
		let mut cursor = self.head.as_deref();
		while let Some(link) = cursor {
			links.push(link.markup.as_str());
			cursor = link.prev.as_deref();
		}
		for markup in links.into_iter().rev() {
			output.push_str(markup);
		}
	}
}

impl Drop for Chain {
	// Unlinks iteratively; the default drop recurses once per sibling.
	fn drop(&mut self) {
		let mut cursor = self.head.take();
		while let Some(link) = cursor {
			match Rc::try_unwrap(link) {
				Ok(mut link) => cursor = link.prev.take(),
				Err(_) => break,
			}
		}
	}
}

impl fmt::Debug for Chain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Chain").field("len", &self.len).finish()
	}
}

/// Running output of a nested-callback scope.
#[derive(Clone, Default)]
pub(crate) struct Scope {
	current: Rc<RefCell<String>>,
}

impl Scope {
	/// Creates a scope whose output starts with `seed`.
	pub(crate) fn seeded(seed: String) -> Self {
		Self {
			current: Rc::new(RefCell::new(seed)),
		}
	}

	/// Appends markup to the running output, in call order.
	pub(crate) fn append_with(&self, write: impl FnOnce(&mut String)) {
		write(&mut *self.current.borrow_mut());
	}

	pub(crate) fn render_into(&self, output: &mut String) {
		output.push_str(&self.current.borrow());
	}
}

impl fmt::Debug for Scope {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Scope")
			.field("bytes", &self.current.borrow().len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn rendered(chain: &Chain) -> String {
		let mut output = String::new();
		chain.render_into(&mut output);
		output
	}

	#[rstest]
	fn test_chain_renders_oldest_first() {
		// Arrange
		let chain = Chain::default()
			.push("<a></a>".to_string())
			.push("<b></b>".to_string())
			.push("<c></c>".to_string());

		// Act
		let output = rendered(&chain);

		// Assert
		assert_eq!(output, "<a></a><b></b><c></c>");
		assert_eq!(chain.len(), 3);
	}

	#[rstest]
	fn test_chain_push_leaves_snapshot_untouched() {
		// Arrange
		let base = Chain::default().push("1".to_string());

		// Act
		let left = base.push("L".to_string());
		let right = base.push("R".to_string());

		// Assert
		assert_eq!(rendered(&base), "1");
		assert_eq!(rendered(&left), "1L");
		assert_eq!(rendered(&right), "1R");
	}

	#[rstest]
	fn test_long_chain_drops_without_recursion() {
		// Arrange
		let mut chain = Chain::default();
		for _ in 0..200_000 {
			chain = chain.push("<li>x</li>".to_string());
		}

		// Act
		let branch = chain.push("<li>y</li>".to_string());
		drop(chain);

		// Assert
		assert_eq!(branch.len(), 200_001);
		drop(branch);
	}

	#[rstest]
	fn test_scope_is_shared_between_handles() {
		// Arrange
		let scope = Scope::seeded("x".to_string());
		let alias = scope.clone();

		// Act
		alias.append_with(|out| out.push('y'));
		scope.append_with(|out| out.push('z'));

		// Assert
		let mut output = String::new();
		scope.render_into(&mut output);
		assert_eq!(output, "xyz");
	}

	#[rstest]
	#[case(Composition::Standalone, Mode::Standalone)]
	#[case(Composition::Chained(Chain::default().push(String::new())), Mode::Chained { siblings: 1 })]
	#[case(Composition::Scoped(Scope::default()), Mode::Scoped)]
	fn test_mode(#[case] composition: Composition, #[case] expected: Mode) {
		assert_eq!(composition.mode(), expected);
	}
}
