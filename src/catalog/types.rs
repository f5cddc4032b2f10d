use std::fmt;

/// Immutable record held by a [`Shelf`](super::Shelf).
///
/// Created at setup, never mutated, destroyed only by removal from
/// the owning shelf.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    title: String,
    author: String,
}

impl Book {
    /// Construct a new record.
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
        }
    }

    /// Title of the book.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author of the book.
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.author)
    }
}
