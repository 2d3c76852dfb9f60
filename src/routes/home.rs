//! Public landing page with calls to action that open the auth overlays.

use crate::components::{AppShell, Button};
use crate::routes::overlay::use_open_overlay;
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let open_overlay = use_open_overlay();
    let open_login = open_overlay.clone();
    let open_register = open_overlay;

    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
                <h1 class="text-4xl md:text-5xl font-extrabold text-gray-900 dark:text-white">
                    "Tu compañero de películas"
                </h1>
                <p class="mt-4 max-w-xl text-gray-500 dark:text-gray-400">
                    "Descubre vídeos, guarda tus favoritos, puntúa lo que ves y comenta con la comunidad."
                </p>
                <div class="mt-8 flex flex-col sm:flex-row gap-4">
                    <Button on_click=Callback::new(move |_| open_login(paths::LOGIN))>
                        "Iniciar sesión"
                    </Button>
                    <button
                        type="button"
                        class="px-5 py-2.5 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100 hover:text-blue-700 dark:bg-gray-800 dark:text-gray-400 dark:border-gray-600 dark:hover:text-white dark:hover:bg-gray-700 transition-all"
                        on:click=move |_| open_register(paths::REGISTER)
                    >
                        "Crear cuenta"
                    </button>
                </div>
            </div>
        </AppShell>
    }
}
