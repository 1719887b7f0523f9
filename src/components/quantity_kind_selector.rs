//! Quantity Kind Selector Component
//!
//! Radio buttons choosing between a plain count and a size with a unit.

use leptos::prelude::*;
use shopping_core::QuantityKind;

#[component]
pub fn QuantityKindSelector(
    #[prop(into)] current: Signal<QuantityKind>,
    on_change: impl Fn(QuantityKind) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="quantity-kind-selector">
            <span class="selector-title">"Select Quantity Type:"</span>
            {QuantityKind::ALL.into_iter().map(move |kind| {
                view! {
                    <label class="kind-option">
                        <input
                            type="radio"
                            name="quantity-kind"
                            value=kind.as_str()
                            prop:checked=move || current.get() == kind
                            on:change=move |_| on_change(kind)
                        />
                        {kind.label()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}
