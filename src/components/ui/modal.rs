//! Overlay dialog used by the auth modals and confirmation prompts. Clicking
//! the backdrop or the close button reports a close request; the caller owns
//! navigation and state.

use leptos::prelude::*;

#[component]
pub fn Modal(
    title: String,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/50 backdrop-blur-sm"
            on:click=move |_| on_close.run(())
        >
            <div
                class="bg-white dark:bg-gray-800 rounded-xl shadow-xl border border-gray-200 dark:border-gray-700 w-full max-w-md overflow-hidden animate-in fade-in zoom-in duration-200"
                on:click=move |event| event.stop_propagation()
            >
                <div class="px-6 py-4 border-b border-gray-100 dark:border-gray-700 flex items-center justify-between">
                    <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{title}</h2>
                    <button
                        on:click=move |_| on_close.run(())
                        class="text-gray-400 hover:text-gray-600 dark:hover:text-gray-200"
                        aria-label="Cerrar"
                    >
                        <span class="material-symbols-outlined">"close"</span>
                    </button>
                </div>
                <div class="p-6">{children()}</div>
            </div>
        </div>
    }
}
