//! Error types for the Bookshelf domain
//!
//! All domain errors are validation errors: they are recovered locally by
//! rejecting the offending field or operation and leaving state unchanged.
//! Lookup and persistence failures live in the catalog crate.

use thiserror::Error;

/// Domain error type for Bookshelf
#[derive(Error, Debug)]
pub enum AppError {
    /// A required text field was empty after trimming
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// A rating outside the accepted 0-10 range
    #[error("rating {value} is out of range (0-10)")]
    RatingOutOfRange { value: i64 },
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the menu
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyField { field } => format!("The {} cannot be empty.", field),
            Self::RatingOutOfRange { .. } => {
                "The rating must be between 0 and 10.".to_string()
            }
        }
    }
}

/// Convenience type alias for Results using AppError
pub type Result<T> = std::result::Result<T, AppError>;
