//! Bookshelf catalog management
//!
//! Owns the in-memory record collection and its persistence round-trip.
//! The interactive menu drives these operations and renders text; all
//! state transitions and derived views live here.

pub mod error;
pub mod persistence;
pub mod store;

pub use error::{CatalogError, CatalogResult, Result};
pub use persistence::CatalogFile;
pub use store::{Catalog, MarkReadOutcome, SortKey};
