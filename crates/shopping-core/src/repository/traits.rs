//! Repository Layer - Core Traits
//!
//! Defines the operations the view layer performs on the list.

use crate::domain::{IndexOutOfRange, ItemDraft, ShoppingItem, ValidationResult};

/// Ordered, append-only store of shopping items.
///
/// All operations are synchronous and expected to run on the UI thread.
/// No remove, edit, reorder or clear.
pub trait ListStore {
    /// Validate a draft and append it to the end of the list
    fn add(&mut self, draft: &ItemDraft) -> ValidationResult<()>;

    /// Flip `checked` on the item at `index`, returning the new value
    fn toggle(&mut self, index: usize) -> Result<bool, IndexOutOfRange>;

    /// All items in insertion order
    fn items(&self) -> &[ShoppingItem];
}
