//! Shopping Item Row Component
//!
//! Checkbox, name and quantity for one list entry.

use leptos::prelude::*;
use shopping_core::ShoppingItem;

use crate::store::{store_toggle_item, use_app_store};

/// A single row in the list
#[component]
pub fn ShoppingItemRow(index: usize, item: ShoppingItem) -> impl IntoView {
    let store = use_app_store();

    let checked = item.checked();
    let name = item.name().to_string();
    let quantity = item.quantity_label();

    view! {
        <div class=if checked { "item-row checked" } else { "item-row" }>
            <input
                type="checkbox"
                prop:checked=checked
                on:change=move |_| store_toggle_item(&store, index)
            />
            <div class="item-body">
                <span class="item-name">{name}</span>
                <span class="item-quantity">{quantity}</span>
            </div>
        </div>
    }
}
