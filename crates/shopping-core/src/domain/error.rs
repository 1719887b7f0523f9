//! Domain Errors
//!
//! Failures returned to the view layer. None of them are fatal.

use thiserror::Error;

/// Common result type for item validation
pub type ValidationResult<T> = Result<T, ValidationFailure>;

/// Why a draft could not become a shopping item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationFailure {
    #[error("Item name is empty")]
    EmptyName,
    #[error("Quantity must be a whole number")]
    InvalidCount,
    #[error("Size is empty")]
    InvalidMeasurement,
    #[error("Unit is empty")]
    MissingUnit,
}

/// Toggle requested on a row that does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Index {index} out of range for list of length {len}")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}
