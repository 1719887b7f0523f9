//! Repository Layer
//!
//! The list store abstraction and its in-memory implementation.

mod traits;
mod shopping_list;

#[cfg(test)]
mod tests;

pub use traits::ListStore;
pub use shopping_list::ShoppingList;
