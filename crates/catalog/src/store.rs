//! In-memory catalog store and its derived views

use crate::error::{CatalogError, Result};
use bookshelf_core::{AppError, Book, BookId, Rating};
use std::cmp::Reverse;

/// Sort criteria for catalog views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// By publication year, ascending
    Year,
    /// By author, alphabetical, case-insensitive
    Author,
    /// By rating, descending; unrated books sort last
    Rating,
}

/// Result of a mark-read operation
///
/// The record is marked read even when the supplied rating is rejected;
/// the rejected value is carried here so the caller can report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkReadOutcome {
    /// The out-of-range rating that was dropped, if any
    pub rejected_rating: Option<i64>,
}

impl MarkReadOutcome {
    /// Returns true if a rating was supplied but not stored
    pub fn rating_rejected(&self) -> bool {
        self.rejected_rating.is_some()
    }
}

/// The in-memory collection of catalog records
///
/// Owns the ordered record list for the lifetime of a session; there is no
/// module-level singleton. Derived views (search, filter, sort) borrow
/// from the stored order without mutating it.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Wraps a previously loaded record list
    pub fn from_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Returns all records in stored order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of records
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the catalog holds no records
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Looks up a record by ID
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Returns the ID the next added record will receive
    ///
    /// Max existing ID plus one, or 1 for an empty catalog. A pure query:
    /// no side effect, so it can be tested independently of `add`.
    pub fn next_id(&self) -> BookId {
        let max = self.books.iter().map(|b| b.id.as_u64()).max().unwrap_or(0);
        BookId::new(max + 1)
    }

    /// Adds a new unread record and returns its assigned ID
    ///
    /// Title and author are trimmed; an empty value rejects the add and
    /// leaves the collection unchanged.
    pub fn add(&mut self, title: &str, author: &str, year: i32) -> Result<BookId> {
        let title = title.trim();
        let author = author.trim();

        if title.is_empty() {
            return Err(AppError::EmptyField { field: "title" }.into());
        }
        if author.is_empty() {
            return Err(AppError::EmptyField { field: "author" }.into());
        }

        let id = self.next_id();
        self.books.push(Book::new(id, title, author, year));
        Ok(id)
    }

    /// Removes a record and returns it
    ///
    /// Interactive confirmation is the caller's responsibility.
    pub fn delete(&mut self, id: BookId) -> Result<Book> {
        let index = self
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or(CatalogError::BookNotFound(id))?;
        Ok(self.books.remove(index))
    }

    /// Case-insensitive substring search over title and author
    ///
    /// Matches keep their original relative order.
    pub fn find(&self, keyword: &str) -> Vec<&Book> {
        self.books
            .iter()
            .filter(|b| b.matches_keyword(keyword))
            .collect()
    }

    /// Marks a record as read, storing rating and comment when valid
    ///
    /// An out-of-range rating does not abort the operation: the record
    /// still becomes read, the rating is stored absent, and the rejected
    /// value is reported in the outcome. An empty comment is stored
    /// absent. Calling this on an already-read record overwrites the
    /// previous rating and comment; the caller gates that behind a
    /// confirmation prompt.
    pub fn mark_read(
        &mut self,
        id: BookId,
        rating: Option<i64>,
        comment: Option<String>,
    ) -> Result<MarkReadOutcome> {
        let book = self
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CatalogError::BookNotFound(id))?;

        let (rating, rejected_rating) = match rating {
            Some(value) => match Rating::new(value) {
                Ok(r) => (Some(r), None),
                Err(_) => (None, Some(value)),
            },
            None => (None, None),
        };

        let comment = comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        book.mark_read(rating, comment);
        Ok(MarkReadOutcome { rejected_rating })
    }

    /// Returns all records matching the given read status, in stored order
    pub fn filter_by_status(&self, read: bool) -> Vec<&Book> {
        self.books.iter().filter(|b| b.read == read).collect()
    }

    /// Returns a sorted view without mutating the stored order
    ///
    /// All sorts are stable: records that compare equal keep their
    /// original relative order. The rating sort maps an absent rating to a
    /// sentinel below any valid rating, so unrated books always appear
    /// last; that mapping is part of the contract.
    pub fn sorted_by(&self, key: SortKey) -> Vec<&Book> {
        let mut view: Vec<&Book> = self.books.iter().collect();
        match key {
            SortKey::Year => view.sort_by_key(|b| b.year),
            SortKey::Author => view.sort_by_key(|b| b.author.to_lowercase()),
            SortKey::Rating => view.sort_by_key(|b| Reverse(rating_sort_key(b.rating))),
        }
        view
    }
}

/// Key transform for the rating sort: absent maps below any valid rating
fn rating_sort_key(rating: Option<Rating>) -> i16 {
    rating.map(|r| i16::from(r.value())).unwrap_or(-1)
}
