//! Shared traits and value types for domain models

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A book rating on the 0-10 scale
///
/// Out-of-range values are unrepresentable: the constructor and the serde
/// deserializer share the same range check, so a persisted catalog can
/// never smuggle an invalid rating into memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Highest accepted rating value
    pub const MAX: u8 = 10;

    /// Creates a rating, rejecting values outside 0-10
    pub fn new(value: i64) -> Result<Self, AppError> {
        if (0..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(AppError::RatingOutOfRange { value })
        }
    }

    /// Returns the raw rating value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/10", self.0)
    }
}

/// Trait for types that can validate themselves
pub trait Validator {
    /// Validates the instance and returns errors if invalid
    fn validate(&self) -> Result<(), Vec<String>>;

    /// Returns true if the instance is valid
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_accepts_bounds() {
        assert_eq!(Rating::new(0).unwrap().value(), 0);
        assert_eq!(Rating::new(10).unwrap().value(), 10);
    }

    #[test]
    fn test_rating_rejects_out_of_range() {
        assert!(Rating::new(11).is_err());
        assert!(Rating::new(-1).is_err());
        assert!(Rating::new(15).is_err());
    }

    #[test]
    fn test_rating_rejected_value_is_reported() {
        let err = Rating::new(42).unwrap_err();
        assert!(matches!(err, AppError::RatingOutOfRange { value: 42 }));
    }

    #[test]
    fn test_rating_display() {
        let rating = Rating::new(7).unwrap();
        assert_eq!(rating.to_string(), "7/10");
    }

    #[test]
    fn test_rating_try_from_u8() {
        assert!(Rating::try_from(10u8).is_ok());
        assert!(Rating::try_from(11u8).is_err());
    }

    #[test]
    fn test_rating_ordering() {
        let low = Rating::new(3).unwrap();
        let high = Rating::new(8).unwrap();
        assert!(low < high);
    }

    #[test]
    fn test_validator_trait() {
        struct TestType {
            value: i32,
        }

        impl Validator for TestType {
            fn validate(&self) -> Result<(), Vec<String>> {
                if self.value < 0 {
                    Err(vec!["Value must be positive".to_string()])
                } else {
                    Ok(())
                }
            }
        }

        let valid = TestType { value: 10 };
        let invalid = TestType { value: -5 };

        assert!(valid.is_valid());
        assert!(!invalid.is_valid());
    }
}
