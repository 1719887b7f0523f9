//! In-memory Shopping List
//!
//! Lives for the process lifetime; nothing is persisted.

use serde::Serialize;

use super::traits::ListStore;
use crate::domain::{IndexOutOfRange, ItemDraft, ShoppingItem, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ShoppingItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoppingItem> {
        self.items.iter()
    }

    /// Number of items already checked off
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|item| item.checked()).count()
    }
}

impl ListStore for ShoppingList {
    fn add(&mut self, draft: &ItemDraft) -> ValidationResult<()> {
        match ShoppingItem::try_build(draft) {
            Ok(item) => {
                log::debug!(
                    "Added '{}' ({}) at position {}",
                    item.name(),
                    item.quantity(),
                    self.items.len()
                );
                self.items.push(item);
                Ok(())
            }
            Err(e) => {
                log::debug!("Rejected draft for '{}': {}", draft.name, e);
                Err(e)
            }
        }
    }

    fn toggle(&mut self, index: usize) -> Result<bool, IndexOutOfRange> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(IndexOutOfRange { index, len })?;
        let checked = item.toggle();
        log::debug!("Toggled '{}' -> checked={}", item.name(), checked);
        Ok(checked)
    }

    fn items(&self) -> &[ShoppingItem] {
        &self.items
    }
}
