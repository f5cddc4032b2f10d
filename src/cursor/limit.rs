//! Limiting decorator
//!
//! Wraps an inner cursor and caps how many elements it will surface.

use crate::cursor::Cursor;
use crate::CursorError;

/// Decorating cursor that surfaces at most `quota` elements of its
/// inner cursor, then reports exhaustion regardless of what remains
/// underneath.
#[derive(Debug)]
pub struct LimitCursor<C> {
    inner: C,
    remaining: usize,
}

impl<C: Cursor> LimitCursor<C> {
    /// Wrap `inner`, surfacing at most `quota` elements.
    pub fn new(inner: C, quota: usize) -> Self {
        Self {
            inner,
            remaining: quota,
        }
    }

    /// Elements still permitted through this layer.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<C: Cursor> Cursor for LimitCursor<C> {
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        self.remaining > 0 && self.inner.has_next()
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        if self.remaining == 0 {
            return Err(CursorError::Exhausted);
        }
        let item = self.inner.next()?;
        self.remaining -= 1;
        Ok(item)
    }
}
