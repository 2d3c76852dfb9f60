//! Read-only profile card for the signed-in user.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::profile::client;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let profile = LocalResource::new(move || async move { client::fetch().await });

    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-6">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">"Perfil"</h1>

                <Suspense fallback=move || {
                    view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                }>
                    {move || match profile.get() {
                        Some(Ok(profile)) => view! {
                            <div class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-6 space-y-4">
                                <div>
                                    <p class="text-xs uppercase tracking-wide text-gray-400">
                                        "Nombre"
                                    </p>
                                    <p class="text-gray-900 dark:text-white">
                                        {profile.full_name()}
                                    </p>
                                </div>
                                <div>
                                    <p class="text-xs uppercase tracking-wide text-gray-400">
                                        "Edad"
                                    </p>
                                    <p class="text-gray-900 dark:text-white">{profile.age}</p>
                                </div>
                                <div>
                                    <p class="text-xs uppercase tracking-wide text-gray-400">
                                        "Correo"
                                    </p>
                                    <p class="text-gray-900 dark:text-white">{profile.email}</p>
                                </div>
                                <A
                                    href={paths::SETTINGS}
                                    {..}
                                    class="inline-block text-sm text-blue-600 hover:text-blue-800 dark:text-blue-400"
                                >
                                    "Editar en configuración"
                                </A>
                            </div>
                        }
                        .into_any(),
                        Some(Err(err)) => view! {
                            <Alert kind=AlertKind::Error message=err.to_string() />
                        }
                        .into_any(),
                        None => view! {
                            <div class="flex justify-center py-16">
                                <Spinner />
                            </div>
                        }
                        .into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
