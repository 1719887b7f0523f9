//! Domain Layer
//!
//! Contains the shopping item entity and its validation rules.
//! This layer has NO external dependencies (except serde and thiserror).

mod error;
mod item;
mod quantity;
mod units;

pub use error::{IndexOutOfRange, ValidationFailure, ValidationResult};
pub use item::{ItemDraft, ShoppingItem};
pub use quantity::{Quantity, QuantityKind};
pub use units::{default_unit, SIZE_UNITS};
