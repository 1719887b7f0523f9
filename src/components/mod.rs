//! UI Components
//!
//! Leptos components for the single shopping list screen.

mod new_item_form;
mod quantity_kind_selector;
mod shopping_item_list;
mod shopping_item_row;

pub use new_item_form::NewItemForm;
pub use quantity_kind_selector::QuantityKindSelector;
pub use shopping_item_list::ShoppingItemList;
pub use shopping_item_row::ShoppingItemRow;
