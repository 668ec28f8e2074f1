//! Catalog file persistence
//!
//! This module handles reading and writing the catalog file with:
//! - Fail-soft loads (a missing or corrupt file yields an empty collection)
//! - Atomic writes (no partial/corrupted files)
//! - Directory creation
//! - NO PANICS - all errors are handled via Result types or downgraded

use crate::error::{CatalogError, Result};
use bookshelf_core::Book;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Handles catalog file persistence
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    /// Creates a persistence handler for the given catalog file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the record list from file
    ///
    /// Fails soft: a missing file, an unreadable file, and content that
    /// does not parse as a record list all yield an empty collection,
    /// never an error. The in-memory invariants hold for anything this
    /// returns, since records with out-of-range ratings fail to parse.
    pub fn load(&self) -> Vec<Book> {
        if !self.path.exists() {
            log::info!(
                "Catalog file not found at {}, starting empty",
                self.path.display()
            );
            return Vec::new();
        }

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(books) => books,
            Err(e) => {
                log::warn!(
                    "Catalog file {} is not a valid record list: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Saves the record list to file atomically
    ///
    /// This uses a temporary file and atomic rename to ensure the catalog
    /// file is never left in a corrupted state. Any failure is returned to
    /// the caller; the in-memory collection is unaffected either way.
    pub fn save(&self, books: &[Book]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            self.ensure_directory_exists(parent)?;
        }

        // Serialize the full collection; rating/comment stay explicit
        // nulls so round-trips are stable
        let json = serde_json::to_string_pretty(books)?;

        // Write to temporary file first
        let temp_file = self.create_temp_file()?;
        self.write_atomic(temp_file, &json)?;

        log::info!("Catalog saved to {}", self.path.display());
        Ok(())
    }

    /// Ensures a directory exists, creating it if necessary
    fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        // A bare filename has an empty parent; nothing to create
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path)?;
            log::info!("Created catalog directory: {}", path.display());
        }
        Ok(())
    }

    /// Creates a temporary file in the same directory as the catalog file
    fn create_temp_file(&self) -> Result<NamedTempFile> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        Ok(NamedTempFile::new_in(dir)?)
    }

    /// Writes content to a temporary file and atomically renames it
    fn write_atomic(&self, mut temp_file: NamedTempFile, content: &str) -> Result<()> {
        temp_file.write_all(content.as_bytes())?;

        // Flush to ensure all data is written
        temp_file.flush()?;

        // Atomically rename temp file to target path
        temp_file
            .persist(&self.path)
            .map_err(|e| CatalogError::Io(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookshelf_core::{BookId, Rating};
    use std::fs;
    use tempfile::TempDir;

    fn setup_test_dir() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("bookshelf.json");
        (temp_dir, catalog_path)
    }

    fn sample_books() -> Vec<Book> {
        let mut read_book = Book::new(BookId::new(1), "Dune", "Frank Herbert", 1965);
        read_book.mark_read(Some(Rating::new(9).unwrap()), Some("Epic".to_string()));
        let unread_book = Book::new(BookId::new(2), "The Hobbit", "J.R.R. Tolkien", 1937);
        vec![read_book, unread_book]
    }

    #[test]
    fn test_load_nonexistent_returns_empty() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        let store = CatalogFile::new(catalog_path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        let store = CatalogFile::new(catalog_path);
        let books = sample_books();

        store.save(&books).expect("Should save catalog");
        let loaded = store.load();

        assert_eq!(loaded, books);
    }

    #[test]
    fn test_save_after_load_is_idempotent() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        let store = CatalogFile::new(catalog_path.clone());

        store.save(&sample_books()).expect("Should save catalog");
        let first = fs::read_to_string(&catalog_path).expect("Should read file");

        let loaded = store.load();
        store.save(&loaded).expect("Should save again");
        let second = fs::read_to_string(&catalog_path).expect("Should read file");

        assert_eq!(first, second);
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        let store = CatalogFile::new(catalog_path.clone());
        let books = vec![Book::new(BookId::new(1), "Dune", "Frank Herbert", 1965)];

        store.save(&books).expect("Should save catalog");
        let contents = fs::read_to_string(&catalog_path).expect("Should read file");
        let value: serde_json::Value =
            serde_json::from_str(&contents).expect("Should parse JSON");

        let record = &value[0];
        assert!(record["rating"].is_null());
        assert!(record["comment"].is_null());
        assert_eq!(record["id"], 1);
        assert_eq!(record["read"], false);
    }

    #[test]
    fn test_load_non_list_returns_empty() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        fs::write(&catalog_path, "\"not a list\"").expect("Should write file");

        let store = CatalogFile::new(catalog_path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json_returns_empty() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        fs::write(&catalog_path, "this is not valid JSON {{{").expect("Should write file");

        let store = CatalogFile::new(catalog_path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_out_of_range_rating_treated_as_corrupt() {
        // A hand-edited rating outside 0-10 fails Rating's deserializer,
        // so the whole file downgrades to an empty collection instead of
        // laundering an invalid value into memory
        let (_temp_dir, catalog_path) = setup_test_dir();
        let contents = r#"[{"id":1,"title":"T","author":"A","year":2000,"read":true,"rating":15,"comment":null}]"#;
        fs::write(&catalog_path, contents).expect("Should write file");

        let store = CatalogFile::new(catalog_path);

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog_path = temp_dir.path().join("subdir").join("bookshelf.json");
        let store = CatalogFile::new(catalog_path.clone());

        store
            .save(&sample_books())
            .expect("Should create directory and save");

        assert!(catalog_path.exists());
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let (_temp_dir, catalog_path) = setup_test_dir();
        let store = CatalogFile::new(catalog_path);

        store.save(&sample_books()).expect("Should save catalog");
        store.save(&[]).expect("Should save empty catalog");

        assert!(store.load().is_empty());
    }
}
