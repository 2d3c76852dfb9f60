//! Site map: a plain directory of every route, plus the build stamp.

use crate::app_lib::build_info;
use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

const ENTRIES: [(&str, &str); 9] = [
    ("Inicio", paths::HOME),
    ("Descubre", paths::DISCOVER),
    ("Iniciar sesión", paths::LOGIN),
    ("Registrarse", paths::REGISTER),
    ("Recuperar contraseña", paths::RECOVER_PASSWORD),
    ("Perfil", paths::PROFILE),
    ("Favoritos", paths::FAVORITES),
    ("Configuración", paths::SETTINGS),
    ("Mapa del sitio", paths::SITEMAP),
];

#[component]
pub fn SitemapPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Mapa del sitio"
                </h1>
                <ul class="space-y-2">
                    {ENTRIES
                        .iter()
                        .map(|(label, href)| {
                            view! {
                                <li>
                                    <A
                                        href={*href}
                                        {..}
                                        class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                    >
                                        {*label}
                                    </A>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="text-xs text-gray-400">
                    {format!(
                        "cartelera v{} · {}",
                        build_info::version(),
                        build_info::git_commit_hash(),
                    )}
                </p>
            </div>
        </AppShell>
    }
}
