//! # Composable Cursor Traversal
//!
//! This library implements a small traversal layer over a bounded,
//! ordered collection of records:
//!
//! 1. **Shelf**: fixed-capacity ordered collection of [`Book`]s
//! 2. **Base cursor**: produces elements one at a time, supports
//!    removal of the last-produced element
//! 3. **Decorating cursors**: wrap any cursor and apply a policy
//!    (predicate filter, element-count limit) before forwarding
//!
//! Decorators own their inner cursor exclusively and compose by
//! nesting, so arbitrary stacking depth is transparent to callers.
//!
//! ## Usage Example
//!
//! ```
//! use bookshelf::{Book, Shelf, Cursor, FilterCursor, LimitCursor, by_author};
//!
//! let mut shelf = Shelf::with_capacity(5);
//! shelf.add(Book::new("1984", "George Orwell"));
//! shelf.add(Book::new("Animal Farm", "George Orwell"));
//! shelf.add(Book::new("Fahrenheit 451", "Ray Bradbury"));
//!
//! let mut first_orwell =
//!     LimitCursor::new(FilterCursor::new(shelf.cursor(), by_author("George Orwell")), 1);
//! let book = first_orwell.next()?;
//! assert_eq!(book.title(), "1984");
//! assert!(!first_orwell.has_next());
//! # Ok::<(), bookshelf::CursorError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one layer of the traversal mechanism
pub mod catalog; // Bounded record collection
pub mod cursor; // Traversal contract, base cursor, decorators

// Re-exports for convenience
pub use catalog::{Book, Shelf};
pub use cursor::filter::{by_author, FilterCursor};
pub use cursor::limit::LimitCursor;
pub use cursor::{Cursor, CursorIter, ShelfCursor};

use thiserror::Error;

/// Errors signalled by cursor operations
///
/// Both variants mark a programming-contract violation by the caller;
/// neither is retried internally. Callers that guard `next()` with
/// `has_next()` and pair `remove()` with a prior `next()` never see them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    /// `next()` was called with no available element
    #[error("cursor exhausted: no element available")]
    Exhausted,

    /// `remove()` was called without a valid prior `next()` result
    #[error("nothing produced: remove() requires a prior next()")]
    NothingProduced,
}
