//! Shared form styling and the inline per-field error line.

use crate::app_lib::validate::FieldErrors;
use leptos::prelude::*;

/// Input styling shared by every form.
pub const INPUT: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white";
/// Label styling shared by every form.
pub const LABEL: &str = "block mb-2 text-sm font-medium text-gray-900 dark:text-white";

/// Renders the validation error recorded for one field, if any.
#[component]
pub fn FieldErrorText(
    #[prop(into)] errors: Signal<FieldErrors>,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .get(field)
                .map(|message| {
                    view! {
                        <p class="mt-1 text-sm text-red-600 dark:text-red-400">
                            {message.to_string()}
                        </p>
                    }
                })
        }}
    }
}
