//! Interactive 1–5 star row. The whole row disables while a vote is in
//! flight so a click cannot issue duplicate requests.

use leptos::prelude::*;

#[component]
pub fn StarRating(
    #[prop(into)] value: Signal<u8>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(into)] on_rate: Callback<u8>,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-1" role="radiogroup" aria-label="Puntuación">
            {(1u8..=5)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            role="radio"
                            aria-checked=move || (value.get() >= star).to_string()
                            disabled=move || disabled.get()
                            class="text-2xl leading-none transition-colors disabled:cursor-not-allowed"
                            class:text-amber-400=move || (value.get() >= star)
                            class:text-gray-300=move || (value.get() < star)
                            class:opacity-60=move || disabled.get()
                            on:click=move |_| on_rate.run(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
