//! Shopping List Frontend App
//!
//! Single screen: the new item form above the list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{NewItemForm, ShoppingItemList};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);
    log::info!("[APP] Shopping list started");

    view! {
        <main class="shopping-list">
            <h1>"Shopping List"</h1>

            <NewItemForm />

            <ShoppingItemList />

            <p class="item-count">
                {move || {
                    let list = store.list().read();
                    format!("{} items, {} checked", list.len(), list.checked_count())
                }}
            </p>
        </main>
    }
}
