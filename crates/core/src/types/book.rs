//! Book domain model

use crate::types::{Rating, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;

/// Unique identifier for a book
///
/// Sequential and positive: the catalog assigns max existing + 1, starting
/// at 1, and never reuses an ID after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u64);

impl BookId {
    /// Creates a BookId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses a BookId from a decimal string
    pub fn from_string(s: &str) -> Result<Self, ParseIntError> {
        Ok(Self(s.trim().parse()?))
    }

    /// Returns the raw integer value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single catalog record
///
/// `rating` and `comment` are only meaningful once `read` is true; display
/// logic gates on `read` even if stale values are present. Both serialize
/// as explicit `null` when absent so the on-disk shape is stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub read: bool,
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

impl Book {
    /// Creates a new unread book
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            year,
            read: false,
            rating: None,
            comment: None,
        }
    }

    /// Marks the book as read, replacing any previous rating and comment
    pub fn mark_read(&mut self, rating: Option<Rating>, comment: Option<String>) {
        self.read = true;
        self.rating = rating;
        self.comment = comment;
    }

    /// Case-insensitive substring match against title or author
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.author.to_lowercase().contains(&keyword)
    }
}

impl Validator for Book {
    fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.title.trim().is_empty() {
            errors.push("Title cannot be empty".to_string());
        }

        if self.author.trim().is_empty() {
            errors.push("Author cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
