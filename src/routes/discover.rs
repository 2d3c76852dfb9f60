//! Catalog browser. Each category row fetches its own page of videos; the
//! section renders once every row has resolved (all-complete join, not a
//! race), so rows never pop in out of order.

use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::catalog::client;
use crate::features::catalog::types::{SearchPage, Video};
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fixed category rows shown on the discover page.
const CATEGORIES: [(&str, &str); 4] = [
    ("Naturaleza", "nature"),
    ("Ciudad", "city"),
    ("Deportes", "sport"),
    ("Animales", "animals"),
];

const VIDEOS_PER_ROW: u32 = 8;

#[component]
pub fn DiscoverPage() -> impl IntoView {
    let sections: Vec<(&'static str, LocalResource<Result<SearchPage, AppError>>)> = CATEGORIES
        .iter()
        .map(|(label, query)| {
            let query = *query;
            (
                *label,
                LocalResource::new(move || async move {
                    client::search(query, 1, VIDEOS_PER_ROW).await
                }),
            )
        })
        .collect();

    view! {
        <AppShell>
            <div class="space-y-10">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        "Descubre"
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Explora el catálogo por categorías."
                    </p>
                </div>

                <Suspense fallback=move || {
                    view! {
                        <div class="flex justify-center py-16">
                            <Spinner />
                        </div>
                    }
                }>
                    {sections
                        .into_iter()
                        .map(|(label, videos)| {
                            view! { <CategoryRow label=label videos=videos /> }
                        })
                        .collect_view()}
                </Suspense>
            </div>
        </AppShell>
    }
}

#[component]
fn CategoryRow(
    label: &'static str,
    videos: LocalResource<Result<SearchPage, AppError>>,
) -> impl IntoView {
    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">{label}</h2>
            {move || match videos.get() {
                Some(Ok(page)) if page.videos.is_empty() => view! {
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "No hay vídeos en esta categoría."
                    </p>
                }
                .into_any(),
                Some(Ok(page)) => view! {
                    <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-4 gap-4">
                        {page
                            .videos
                            .into_iter()
                            .map(|video| view! { <VideoCard video=video /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                None => view! {
                    <div class="flex justify-center py-8">
                        <Spinner />
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn VideoCard(video: Video) -> impl IntoView {
    let title = video.title();
    let uploader = video.user.name.clone();
    let href = paths::movie_detail(video.id);

    view! {
        <A
            href={href}
            {..}
            class="group block overflow-hidden rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 shadow-sm hover:shadow-md transition-shadow"
        >
            <img
                src=video.image
                alt=title.clone()
                loading="lazy"
                class="aspect-video w-full object-cover group-hover:scale-105 transition-transform"
            />
            <div class="p-3">
                <p class="text-sm font-medium text-gray-900 dark:text-white truncate">{title}</p>
                <p class="text-xs text-gray-500 dark:text-gray-400 truncate">{uploader}</p>
            </div>
        </A>
    }
}
