//! Saved movies. Removing a favorite goes through the same DELETE the detail
//! page uses, then the list re-fetches.

use crate::components::{Alert, AlertKind, AppShell, Spinner, use_toasts};
use crate::features::favorites::client;
use crate::features::favorites::types::FavoriteMovie;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let toaster = use_toasts();
    let (version, set_version) = signal(0u32);
    let favorites = LocalResource::new(move || {
        let _ = version.get();
        async move { client::list().await }
    });

    let remove_action = Action::new_local(move |pexels_id: &u64| {
        let pexels_id = *pexels_id;
        async move { client::remove(pexels_id).await }
    });

    Effect::new(move |_| {
        if let Some(result) = remove_action.value().get() {
            match result {
                Ok(()) => {
                    toaster.success("Eliminada de favoritos.");
                    set_version.update(|v| *v += 1);
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let remove_pending = remove_action.pending();

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Favoritos"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Las películas que has guardado."
                    </p>
                </div>

                <Suspense fallback=move || {
                    view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                }>
                    {move || match favorites.get() {
                        Some(Ok(list)) if list.is_empty() => view! {
                            <p class="text-sm text-gray-500 dark:text-gray-400">
                                "Todavía no has guardado ninguna película."
                            </p>
                        }
                        .into_any(),
                        Some(Ok(list)) => view! {
                            <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
                                {list
                                    .into_iter()
                                    .map(|favorite| {
                                        let pexels_id = favorite.pexels_id;
                                        view! {
                                            <FavoriteCard
                                                favorite=favorite
                                                pending=remove_pending
                                                on_remove=Callback::new(move |()| {
                                                    remove_action.dispatch(pexels_id);
                                                })
                                            />
                                        }
                                    })
                                    .collect_view()}
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

#[component]
fn FavoriteCard(
    favorite: FavoriteMovie,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] on_remove: Callback<()>,
) -> impl IntoView {
    let title = favorite.title();
    let href = paths::movie_detail(favorite.pexels_id);

    view! {
        <div class="group relative overflow-hidden rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-sm hover:shadow-md transition-shadow">
            <A href={href} {..} class="block">
                <img
                    src=favorite.image
                    alt=title.clone()
                    loading="lazy"
                    class="aspect-video w-full object-cover group-hover:scale-105 transition-transform"
                />
                <div class="p-3">
                    <p class="text-sm font-medium text-gray-900 dark:text-white truncate">
                        {title}
                    </p>
                    <p class="text-xs text-gray-500 dark:text-gray-400 truncate">
                        {favorite.user_name}
                    </p>
                </div>
            </A>
            <button
                type="button"
                aria-label="Quitar de favoritos"
                disabled=move || pending.get()
                class="absolute top-2 right-2 text-2xl leading-none text-red-500 drop-shadow disabled:cursor-not-allowed"
                class:opacity-60=move || pending.get()
                on:click=move |_| on_remove.run(())
            >
                "♥"
            </button>
        </div>
    }
}
