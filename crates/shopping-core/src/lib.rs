//! Shopping List Core
//!
//! Layered architecture:
//! - domain: Item model, quantities and validation rules
//! - repository: The ordered list store the view layer mutates
//!
//! Everything here is synchronous and runs on the caller's thread.

pub mod domain;
pub mod repository;

pub use domain::{
    default_unit, IndexOutOfRange, ItemDraft, Quantity, QuantityKind,
    ShoppingItem, ValidationFailure, ValidationResult, SIZE_UNITS,
};
pub use repository::{ListStore, ShoppingList};
