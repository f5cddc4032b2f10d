//! Traversal contract and base cursor
//!
//! A cursor produces the elements of a bounded collection one at a
//! time. Decorating cursors re-expose the same two-operation contract
//! (`has_next`/`next`) while applying a policy, so stacking depth is
//! transparent to callers.

pub mod filter;
pub mod limit;

use crate::catalog::{Book, Shelf};
use crate::CursorError;
use tracing::trace;

/// One-at-a-time traversal over a bounded sequence.
///
/// `has_next` takes `&mut self` so that filtering implementations can
/// buffer lookahead and answer truthfully. Calling `has_next` any
/// number of times without an intervening `next` must not change which
/// elements `next` yields. Once `has_next` returns `false` it stays
/// `false` for the rest of the cursor's life.
pub trait Cursor {
    /// Element type produced by this cursor.
    type Item;

    /// Whether an unread element remains.
    fn has_next(&mut self) -> bool;

    /// Produce the next unread element.
    ///
    /// Fails with [`CursorError::Exhausted`] when no element remains.
    fn next(&mut self) -> Result<Self::Item, CursorError>;

    /// Collect every remaining element in traversal order.
    fn drain(&mut self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        let mut out = Vec::new();
        while self.has_next() {
            match self.next() {
                Ok(item) => out.push(item),
                Err(_) => break,
            }
        }
        out
    }

    /// Adapt this cursor into a [`std::iter::Iterator`].
    fn into_iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter { cursor: self }
    }
}

/// Base cursor over one [`Shelf`].
///
/// Holds the shelf by exclusive reference for its whole lifetime, so
/// no other cursor can observe or mutate the backing storage while
/// this one is live.
#[derive(Debug)]
pub struct ShelfCursor<'a> {
    shelf: &'a mut Shelf,
    position: usize,
    // Slot of the most recent next(); cleared by remove()
    last_produced: Option<usize>,
}

impl<'a> ShelfCursor<'a> {
    pub(crate) fn new(shelf: &'a mut Shelf) -> Self {
        Self {
            shelf,
            position: 0,
            last_produced: None,
        }
    }

    /// Delete the last-produced book from the shelf.
    ///
    /// Subsequent books shift left by one and the cursor rewinds to
    /// the deleted slot, so the following `next()` yields what was
    /// previously the next element. Fails with
    /// [`CursorError::NothingProduced`] when nothing has been produced
    /// yet or the last-produced book was already removed.
    pub fn remove(&mut self) -> Result<Book, CursorError> {
        let slot = self.last_produced.take().ok_or(CursorError::NothingProduced)?;
        let book = self.shelf.take_at(slot);
        self.position = slot;
        Ok(book)
    }
}

impl Cursor for ShelfCursor<'_> {
    type Item = Book;

    fn has_next(&mut self) -> bool {
        self.position < self.shelf.len()
    }

    fn next(&mut self) -> Result<Book, CursorError> {
        let book = self
            .shelf
            .get(self.position)
            .cloned()
            .ok_or(CursorError::Exhausted)?;
        trace!(position = self.position, book = %book, "cursor next");
        self.last_produced = Some(self.position);
        self.position += 1;
        Ok(book)
    }
}

/// Bridges any [`Cursor`] into a standard iterator for `for` loops.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.has_next() {
            self.cursor.next().ok()
        } else {
            None
        }
    }
}
