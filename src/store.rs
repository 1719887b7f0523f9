//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the shopping list and the form fields; components read and mutate it
//! synchronously on the UI thread.

use leptos::prelude::*;
use reactive_stores::Store;
use shopping_core::{ItemDraft, ListStore, ShoppingList, ValidationFailure, ValidationResult};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in insertion order
    pub list: ShoppingList,
    /// Raw form fields for the next item
    pub form: ItemDraft,
    /// Why the last "Add Item" press did nothing (None after a success)
    pub last_error: Option<ValidationFailure>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Try to add the form's draft to the list.
///
/// On success the name and quantity fields are cleared and the unit goes
/// back to the first one; the selected quantity kind stays. On failure the
/// form is left as typed so the user can correct it.
pub fn submit_form<L: ListStore>(form: &mut ItemDraft, list: &mut L) -> ValidationResult<()> {
    list.add(form)?;
    *form = ItemDraft {
        kind: form.kind,
        ..ItemDraft::default()
    };
    Ok(())
}

// ========================
// Store Helper Functions
// ========================

/// Submit the form held in the store
pub fn store_submit_form(store: &AppStore) {
    store.update(|state| {
        state.last_error = submit_form(&mut state.form, &mut state.list).err();
    });
}

/// Toggle the checked state of the row at `index`
pub fn store_toggle_item(store: &AppStore, index: usize) {
    store.list().update(|list| {
        if let Err(e) = list.toggle(index) {
            log::warn!("[STORE] {}", e);
        }
    });
}
