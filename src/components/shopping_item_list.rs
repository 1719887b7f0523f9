//! Shopping Item List Component
//!
//! Renders every item in insertion order.

use leptos::prelude::*;

use crate::components::ShoppingItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ShoppingItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="item-list">
            {move || {
                store.list().read().iter().cloned().enumerate()
                    .map(|(index, item)| view! { <ShoppingItemRow index=index item=item /> })
                    .collect_view()
            }}
        </div>
    }
}
