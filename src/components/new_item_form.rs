//! New Item Form Component
//!
//! Name, quantity type and quantity fields plus the "Add Item" button.

use leptos::prelude::*;
use shopping_core::{QuantityKind, SIZE_UNITS};

use crate::components::QuantityKindSelector;
use crate::store::{store_submit_form, use_app_store, AppStateStoreFields};

/// Form for adding items to the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let form = store.form();

    // Only rebuild the quantity inputs when the kind actually changes
    let kind = Memo::new(move |_| form.read().kind);

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_form(&store);
    };

    view! {
        <form class="new-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="Item Name"
                prop:value=move || form.read().name.clone()
                on:input=move |ev| form.write().name = event_target_value(&ev)
            />

            <QuantityKindSelector
                current=kind
                on_change=move |selected| form.write().kind = selected
            />

            {move || match kind.get() {
                QuantityKind::Count => view! {
                    <input
                        type="number"
                        inputmode="numeric"
                        placeholder="Quantity (Number)"
                        prop:value=move || form.read().count.clone()
                        on:input=move |ev| form.write().count = event_target_value(&ev)
                    />
                }.into_any(),
                QuantityKind::Measured => view! {
                    <div class="measured-row">
                        <input
                            type="text"
                            placeholder="Quantity (Size)"
                            prop:value=move || form.read().measured_value.clone()
                            on:input=move |ev| form.write().measured_value = event_target_value(&ev)
                        />
                        <select
                            class="unit-select"
                            on:change=move |ev| form.write().unit = event_target_value(&ev)
                        >
                            {SIZE_UNITS.iter().map(|unit| {
                                let unit = *unit;
                                view! {
                                    <option
                                        value=unit
                                        prop:selected=move || form.read().unit == unit
                                    >
                                        {unit}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                }.into_any(),
            }}

            <button type="submit">"Add Item"</button>

            {move || store.last_error().get().map(|e| view! {
                <p class="form-hint">{e.to_string()}</p>
            })}
        </form>
    }
}
