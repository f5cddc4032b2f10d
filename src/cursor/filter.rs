//! Filtering decorator
//!
//! Wraps an inner cursor and surfaces only the elements satisfying a
//! predicate. Correctness hinges on lookahead-and-cache: `has_next`
//! must pull ahead from the inner cursor to answer truthfully, and the
//! pulled element must be cached so repeated `has_next` calls without
//! an intervening `next` neither skip nor duplicate elements.

use std::fmt;

use crate::catalog::Book;
use crate::cursor::Cursor;
use crate::CursorError;
use tracing::trace;

/// Lookahead cache state.
///
/// Kept as an explicit tri-state rather than a flag plus an `Option`,
/// so "no lookahead attempted yet" and "source exhausted" are never
/// conflated.
#[derive(Debug)]
enum Lookahead<T> {
    /// No lookahead performed since the last production.
    Unfilled,
    /// A matching element is buffered and owed to the caller.
    Found(T),
    /// The inner cursor ran out without a further match. Terminal.
    Exhausted,
}

/// Decorating cursor that forwards only elements matching a predicate.
///
/// Owns its inner cursor exclusively; elements the predicate rejects
/// are consumed from the inner cursor and dropped.
pub struct FilterCursor<C: Cursor, P> {
    inner: C,
    predicate: P,
    lookahead: Lookahead<C::Item>,
}

// Manual impl: the predicate is usually a closure and the buffered
// item need not be Debug itself.
impl<C: Cursor, P> fmt::Debug for FilterCursor<C, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.lookahead {
            Lookahead::Unfilled => "unfilled",
            Lookahead::Found(_) => "found",
            Lookahead::Exhausted => "exhausted",
        };
        f.debug_struct("FilterCursor")
            .field("lookahead", &state)
            .finish_non_exhaustive()
    }
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    /// Wrap `inner`, surfacing only elements for which `predicate`
    /// returns `true`.
    pub fn new(inner: C, predicate: P) -> Self {
        Self {
            inner,
            predicate,
            lookahead: Lookahead::Unfilled,
        }
    }

    /// Pull from the inner cursor until a match or exhaustion, leaving
    /// the outcome in the cache. Only called while `Unfilled`.
    fn refill(&mut self) {
        while self.inner.has_next() {
            match self.inner.next() {
                Ok(candidate) if (self.predicate)(&candidate) => {
                    self.lookahead = Lookahead::Found(candidate);
                    return;
                }
                Ok(_) => {
                    trace!("filter lookahead skipped non-matching element");
                }
                Err(_) => break,
            }
        }
        self.lookahead = Lookahead::Exhausted;
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: FnMut(&C::Item) -> bool,
{
    type Item = C::Item;

    fn has_next(&mut self) -> bool {
        if matches!(self.lookahead, Lookahead::Unfilled) {
            self.refill();
        }
        matches!(self.lookahead, Lookahead::Found(_))
    }

    fn next(&mut self) -> Result<Self::Item, CursorError> {
        if !self.has_next() {
            return Err(CursorError::Exhausted);
        }
        match std::mem::replace(&mut self.lookahead, Lookahead::Unfilled) {
            Lookahead::Found(item) => Ok(item),
            // has_next() above guarantees a buffered match
            _ => Err(CursorError::Exhausted),
        }
    }
}

/// Predicate matching books by exact author name.
pub fn by_author(author: impl Into<String>) -> impl FnMut(&Book) -> bool {
    let author = author.into();
    move |book| book.author() == author
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Book, Shelf};
    use crate::CursorError;

    /// Inner cursor that counts how many elements were pulled from it.
    struct CountingCursor {
        items: Vec<u32>,
        position: usize,
        pulls: usize,
    }

    impl CountingCursor {
        fn new(items: Vec<u32>) -> Self {
            Self {
                items,
                position: 0,
                pulls: 0,
            }
        }
    }

    impl Cursor for CountingCursor {
        type Item = u32;

        fn has_next(&mut self) -> bool {
            self.position < self.items.len()
        }

        fn next(&mut self) -> Result<u32, CursorError> {
            let item = *self
                .items
                .get(self.position)
                .ok_or(CursorError::Exhausted)?;
            self.position += 1;
            self.pulls += 1;
            Ok(item)
        }
    }

    fn sample_shelf() -> Shelf {
        let mut shelf = Shelf::with_capacity(5);
        shelf.add(Book::new("1984", "George Orwell"));
        shelf.add(Book::new("Animal Farm", "George Orwell"));
        shelf.add(Book::new("Fahrenheit 451", "Ray Bradbury"));
        shelf.add(Book::new("The Martian Chronicles", "Ray Bradbury"));
        shelf.add(Book::new("Brave New World", "Aldous Huxley"));
        shelf
    }

    #[test]
    fn surfaces_matching_subsequence_in_order() {
        let mut shelf = sample_shelf();
        let titles: Vec<String> = FilterCursor::new(shelf.cursor(), by_author("Ray Bradbury"))
            .drain()
            .into_iter()
            .map(|book| book.title().to_string())
            .collect();
        assert_eq!(titles, ["Fahrenheit 451", "The Martian Chronicles"]);
    }

    #[test]
    fn repeated_has_next_does_not_rescan() {
        let inner = CountingCursor::new(vec![1, 2, 3, 4]);
        let mut filtered = FilterCursor::new(inner, |n: &u32| n % 2 == 0);

        assert!(filtered.has_next());
        let pulls_after_first = filtered.inner.pulls;
        for _ in 0..4 {
            assert!(filtered.has_next());
        }
        assert_eq!(filtered.inner.pulls, pulls_after_first);
        assert_eq!(filtered.next().unwrap(), 2);
    }

    #[test]
    fn no_match_is_exhausted() {
        let mut shelf = sample_shelf();
        let mut filtered = FilterCursor::new(shelf.cursor(), by_author("Isaac Asimov"));
        assert!(!filtered.has_next());
        assert_eq!(filtered.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn next_without_has_next_still_works() {
        let mut shelf = sample_shelf();
        let mut filtered = FilterCursor::new(shelf.cursor(), by_author("Aldous Huxley"));
        assert_eq!(filtered.next().unwrap().title(), "Brave New World");
        assert_eq!(filtered.next(), Err(CursorError::Exhausted));
    }

    #[test]
    fn exhaustion_is_terminal() {
        let inner = CountingCursor::new(vec![1, 3, 5]);
        let mut filtered = FilterCursor::new(inner, |n: &u32| n % 2 == 0);
        assert!(!filtered.has_next());
        assert!(!filtered.has_next());
        assert_eq!(filtered.next(), Err(CursorError::Exhausted));
    }
}
