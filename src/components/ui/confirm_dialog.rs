//! Confirmation prompt for destructive actions (account deletion, comment
//! removal). Built on the shared `Modal`.

use crate::components::ui::modal::Modal;
use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[prop(optional)] confirm_label: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] pending: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or("Eliminar");

    view! {
        <Modal title=title on_close=move |()| on_cancel.run(())>
            <p class="text-sm text-gray-600 dark:text-gray-300">{message}</p>
            <div class="mt-6 flex flex-col-reverse sm:flex-row gap-3 sm:justify-end">
                <button
                    type="button"
                    on:click=move |_| on_cancel.run(())
                    class="px-5 py-2.5 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 focus:ring-4 focus:ring-gray-100 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700 dark:focus:ring-gray-700"
                >
                    "Cancelar"
                </button>
                <button
                    type="button"
                    on:click=move |_| on_confirm.run(())
                    disabled=move || pending.get()
                    class="px-5 py-2.5 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700 focus:ring-4 focus:ring-red-300 dark:focus:ring-red-800"
                    class:opacity-70=move || pending.get()
                    class:cursor-not-allowed=move || pending.get()
                >
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
