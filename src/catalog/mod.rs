//! Bounded record collection
//!
//! An ordered sequence of [`Book`]s with a fixed maximum capacity.
//! Append-only except for cursor-driven removal; element order is
//! insertion order minus removals.

mod types;

pub use types::Book;

use crate::cursor::ShelfCursor;
use tracing::debug;

/// Fixed-capacity ordered collection of [`Book`]s.
///
/// Traversal goes through [`Shelf::cursor`]. Handing out a cursor
/// borrows the shelf mutably, so at most one cursor is live at a time
/// and mutation during iteration by a second cursor cannot be
/// expressed.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelf {
    books: Vec<Book>,
    capacity: usize,
}

impl Shelf {
    /// Create an empty shelf holding at most `capacity` books.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            books: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a book, keeping insertion order.
    ///
    /// Returns `false` without modifying the shelf when it is already
    /// at capacity.
    pub fn add(&mut self, book: Book) -> bool {
        if self.books.len() >= self.capacity {
            debug!(capacity = self.capacity, rejected = %book, "shelf full");
            return false;
        }
        debug!(slot = self.books.len(), added = %book, "shelf add");
        self.books.push(book);
        true
    }

    /// Fresh cursor over the current contents, starting at position 0.
    pub fn cursor(&mut self) -> ShelfCursor<'_> {
        ShelfCursor::new(self)
    }

    /// Number of books currently held.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Whether the shelf holds no books.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Maximum number of books the shelf can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current contents in traversal order.
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Book at `index`, if present.
    pub(crate) fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    /// Delete the book at `index`, shifting subsequent books left.
    ///
    /// Only reachable through `ShelfCursor::remove`, which guarantees
    /// the index is in bounds.
    pub(crate) fn take_at(&mut self, index: usize) -> Book {
        let book = self.books.remove(index);
        debug!(slot = index, removed = %book, "shelf remove");
        book
    }
}
