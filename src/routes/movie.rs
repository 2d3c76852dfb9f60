//! Movie detail route: playback, favorite toggle, star ratings, and the
//! comment thread. Every async action is owned by the component instance that
//! triggered it; controls disable while a request is in flight.

use crate::app_lib::validate::{COMMENT_MAX_CHARS, FieldErrors, Validator};
use crate::components::{
    Alert, AlertKind, AppShell, Button, ConfirmDialog, Spinner, StarRating, use_toasts,
};
use crate::features::catalog::client as catalog_client;
use crate::features::catalog::types::Video;
use crate::features::comments::client as comments_client;
use crate::features::comments::types::{Comment, CreateCommentRequest, UpdateCommentRequest};
use crate::features::favorites::client as favorites_client;
use crate::features::favorites::types::AddFavoriteRequest;
use crate::features::profile::client as profile_client;
use crate::features::ratings::client as ratings_client;
use crate::features::ratings::types::RateRequest;
use leptos::prelude::*;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

#[derive(Params, PartialEq, Clone)]
struct MovieParams {
    id: Option<String>,
}

/// Route entry: parses the `:id` segment and delegates to the screen.
#[component]
pub fn MoviePage() -> impl IntoView {
    let params = use_params::<MovieParams>();
    let movie_id = Memo::new(move |_| {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .and_then(|id| id.parse::<u64>().ok())
    });

    view! {
        {move || match movie_id.get() {
            Some(pexels_id) => view! { <MovieScreen pexels_id=pexels_id /> }.into_any(),
            None => view! {
                <AppShell>
                    <Alert
                        kind=AlertKind::Error
                        message="Película no encontrada.".to_string()
                    />
                </AppShell>
            }
            .into_any(),
        }}
    }
}

/// Full detail screen for one catalog id. Also rendered directly as the base
/// layer under an auth overlay, where no route params are available.
#[component]
pub fn MovieScreen(pexels_id: u64) -> impl IntoView {
    let video = LocalResource::new(move || async move { catalog_client::find_by_id(pexels_id).await });

    view! {
        <AppShell>
            <Suspense fallback=move || {
                view! {
                    <div class="flex justify-center py-16">
                        <Spinner />
                    </div>
                }
            }>
                {move || match video.get() {
                    Some(Ok(video)) => view! { <MovieDetail video=video /> }.into_any(),
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
        </AppShell>
    }
}

#[component]
fn MovieDetail(video: Video) -> impl IntoView {
    let pexels_id = video.id;
    let title = video.title();
    let uploader = video.user.name.clone();
    let poster = video.image.clone();
    let source = video.best_file().map(|file| file.link.clone());

    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <div class="overflow-hidden rounded-xl border border-gray-200 dark:border-gray-700 bg-black">
                {match source {
                    Some(link) => view! {
                        <video controls poster=poster.clone() src=link class="w-full aspect-video"></video>
                    }
                    .into_any(),
                    None => view! {
                        <img src=poster.clone() alt=title.clone() class="w-full aspect-video object-cover" />
                    }
                    .into_any(),
                }}
            </div>

            <div class="flex flex-wrap items-start justify-between gap-4">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                        {title.clone()}
                    </h1>
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Subido por " {uploader}
                    </p>
                </div>
                <FavoriteToggle video=video.clone() />
            </div>

            <RatingSection pexels_id=pexels_id />
            <CommentsSection pexels_id=pexels_id />
        </div>
    }
}

/// Heart toggle for the favorites join. One API call per click: POST to save,
/// DELETE to remove.
#[component]
fn FavoriteToggle(video: Video) -> impl IntoView {
    let toaster = use_toasts();
    let pexels_id = video.id;
    let snapshot = AddFavoriteRequest {
        image: video.image.clone(),
        url: video.url.clone(),
        user_name: video.user.name.clone(),
    };

    let saved = LocalResource::new(move || async move {
        favorites_client::find(pexels_id)
            .await
            .map(|favorite| favorite.is_some())
    });
    // Local override after a successful toggle; the resource stays untouched.
    let toggled = RwSignal::new(None::<bool>);
    let is_favorite = Signal::derive(move || {
        toggled
            .get()
            .or_else(|| saved.get().and_then(Result::ok))
            .unwrap_or(false)
    });

    let toggle_action = Action::new_local(move |currently_saved: &bool| {
        let currently_saved = *currently_saved;
        let snapshot = snapshot.clone();
        async move {
            if currently_saved {
                favorites_client::remove(pexels_id).await.map(|()| false)
            } else {
                favorites_client::add(pexels_id, &snapshot).await.map(|()| true)
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = toggle_action.value().get() {
            match result {
                Ok(now_saved) => {
                    toggled.set(Some(now_saved));
                    if now_saved {
                        toaster.success("Añadida a favoritos.");
                    } else {
                        toaster.success("Eliminada de favoritos.");
                    }
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let pending = toggle_action.pending();

    view! {
        <button
            type="button"
            aria-pressed=move || is_favorite.get().to_string()
            aria-label="Favorito"
            disabled=move || pending.get()
            class="text-3xl leading-none transition-colors disabled:cursor-not-allowed"
            class:text-red-500=move || is_favorite.get()
            class:text-gray-400=move || !is_favorite.get()
            class:opacity-60=move || pending.get()
            on:click=move |_| {
                toggle_action.dispatch(is_favorite.get_untracked());
            }
        >
            {move || if is_favorite.get() { "♥" } else { "♡" }}
        </button>
    }
}

/// Star row plus the aggregate. Submitting re-fetches the summary so the
/// average and count reflect the server's state.
#[component]
fn RatingSection(pexels_id: u64) -> impl IntoView {
    let toaster = use_toasts();
    let (version, set_version) = signal(0u32);
    let summary = LocalResource::new(move || {
        let _ = version.get();
        async move { ratings_client::for_movie(pexels_id).await }
    });

    let rate_action = Action::new_local(move |value: &u8| {
        let value = *value;
        async move {
            ratings_client::rate(&RateRequest {
                value,
                movie_pexels_id: pexels_id,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = rate_action.value().get() {
            match result {
                Ok(()) => {
                    toaster.success("Puntuación guardada.");
                    set_version.update(|v| *v += 1);
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let pending = rate_action.pending();
    let own_value = Signal::derive(move || {
        summary
            .get()
            .and_then(Result::ok)
            .and_then(|summary| summary.own_value)
            .unwrap_or(0)
    });

    view! {
        <section class="space-y-3">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Puntuación"</h2>
            <div class="flex items-center gap-4">
                <StarRating
                    value=own_value
                    disabled=pending
                    on_rate=move |value: u8| {
                        rate_action.dispatch(value);
                    }
                />
                {move || match summary.get() {
                    Some(Ok(summary)) => view! {
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {format!(
                                "{} ({} votos)",
                                summary.display_average(),
                                summary.count,
                            )}
                        </p>
                    }
                    .into_any(),
                    Some(Err(err)) => view! {
                        <Alert kind=AlertKind::Error message=err.to_string() />
                    }
                    .into_any(),
                    None => view! { <Spinner /> }.into_any(),
                }}
            </div>
        </section>
    }
}

/// Comment thread: list, create with a live character counter, and
/// author-only edit/delete.
#[component]
fn CommentsSection(pexels_id: u64) -> impl IntoView {
    let toaster = use_toasts();
    let (version, set_version) = signal(0u32);
    let comments = LocalResource::new(move || {
        let _ = version.get();
        async move { comments_client::list_for_movie(pexels_id).await }
    });
    // Own profile id for authorship checks; a failed fetch just hides the
    // edit/delete controls.
    let own_id = LocalResource::new(move || async move {
        profile_client::fetch().await.ok().and_then(|profile| profile.id)
    });
    let own_id_signal = Signal::derive(move || own_id.get().flatten());

    let (text, set_text) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());

    let create_action = Action::new_local(move |body: &String| {
        let body = body.clone();
        async move {
            comments_client::create(&CreateCommentRequest {
                text: body,
                movie_pexels_id: pexels_id,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = create_action.value().get() {
            match result {
                Ok(()) => {
                    set_text.set(String::new());
                    toaster.success("Comentario publicado.");
                    set_version.update(|v| *v += 1);
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::default());

        let body = text.get_untracked().trim().to_string();
        match Validator::new().comment_body("text", &body).finish() {
            Ok(()) => {
                create_action.dispatch(body);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    let on_changed = Callback::new(move |()| set_version.update(|v| *v += 1));
    let pending = create_action.pending();

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Comentarios"</h2>

            <form class="space-y-2" on:submit=on_submit>
                <textarea
                    rows="2"
                    class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:placeholder-gray-400 dark:text-white"
                    placeholder="Escribe un comentario..."
                    maxlength=COMMENT_MAX_CHARS.to_string()
                    prop:value=move || text.get()
                    on:input=move |event| set_text.set(event_target_value(&event))
                ></textarea>
                <div class="flex items-center justify-between">
                    <span class="text-xs text-gray-500 dark:text-gray-400">
                        {move || format!("{}/{}", text.get().chars().count(), COMMENT_MAX_CHARS)}
                    </span>
                    <Button button_type="submit" disabled=pending>
                        "Publicar"
                    </Button>
                </div>
                {move || {
                    field_errors
                        .get()
                        .get("text")
                        .map(|message| {
                            view! {
                                <p class="text-sm text-red-600 dark:text-red-400">
                                    {message.to_string()}
                                </p>
                            }
                        })
                }}
            </form>

            {move || match comments.get() {
                Some(Ok(list)) if list.is_empty() => view! {
                    <p class="text-sm text-gray-500 dark:text-gray-400">
                        "Todavía no hay comentarios. Sé el primero."
                    </p>
                }
                .into_any(),
                Some(Ok(list)) => view! {
                    <ul class="space-y-3">
                        {list
                            .into_iter()
                            .map(|comment| {
                                view! {
                                    <CommentItem
                                        comment=comment
                                        own_id=own_id_signal
                                        on_changed=on_changed
                                    />
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any(),
                Some(Err(err)) => view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }
                .into_any(),
                None => view! {
                    <div class="flex justify-center py-4">
                        <Spinner />
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn CommentItem(
    comment: Comment,
    #[prop(into)] own_id: Signal<Option<String>>,
    #[prop(into)] on_changed: Callback<()>,
) -> impl IntoView {
    let toaster = use_toasts();
    let comment_id = comment.id;
    let author_id = comment.user_id.clone();
    let author_name = comment.user_name.clone();
    let created_at = comment.created_at.clone();
    let original_text = comment.text.clone();

    let is_own = Signal::derive(move || own_id.get().as_deref() == Some(author_id.as_str()));
    let editing = RwSignal::new(false);
    let draft = RwSignal::new(original_text.clone());
    let confirm_delete = RwSignal::new(false);
    let (edit_error, set_edit_error) = signal(None::<String>);

    let update_action = Action::new_local(move |body: &String| {
        let body = body.clone();
        async move {
            comments_client::update(comment_id, &UpdateCommentRequest { text: body }).await
        }
    });
    let delete_action = Action::new_local(move |(): &()| async move {
        comments_client::remove(comment_id).await
    });

    Effect::new(move |_| {
        if let Some(result) = update_action.value().get() {
            match result {
                Ok(()) => {
                    editing.set(false);
                    toaster.success("Comentario actualizado.");
                    on_changed.run(());
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    confirm_delete.set(false);
                    toaster.success("Comentario eliminado.");
                    on_changed.run(());
                }
                Err(err) => {
                    confirm_delete.set(false);
                    toaster.error(err.to_string());
                }
            }
        }
    });

    let save_edit = move |_| {
        set_edit_error.set(None);
        let body = draft.get_untracked().trim().to_string();
        match Validator::new().comment_body("text", &body).finish() {
            Ok(()) => {
                update_action.dispatch(body);
            }
            Err(errors) => {
                set_edit_error.set(errors.get("text").map(str::to_string));
            }
        }
    };

    let update_pending = update_action.pending();
    let delete_pending = delete_action.pending();

    view! {
        <li class="rounded-lg border border-gray-200 dark:border-gray-700 bg-white dark:bg-gray-800 p-4 space-y-2">
            <div class="flex items-center justify-between">
                <p class="text-sm font-medium text-gray-900 dark:text-white">{author_name}</p>
                <span class="text-xs text-gray-400">{created_at}</span>
            </div>

            <Show
                when=move || editing.get()
                fallback={
                    let original_text = original_text.clone();
                    move || {
                        view! {
                            <p class="text-sm text-gray-700 dark:text-gray-300">
                                {original_text.clone()}
                            </p>
                        }
                    }
                }
            >
                <div class="space-y-2">
                    <textarea
                        rows="2"
                        class="bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 dark:bg-gray-700 dark:border-gray-600 dark:text-white"
                        maxlength=COMMENT_MAX_CHARS.to_string()
                        prop:value=move || draft.get()
                        on:input=move |event| draft.set(event_target_value(&event))
                    ></textarea>
                    <span class="text-xs text-gray-500 dark:text-gray-400">
                        {move || format!("{}/{}", draft.get().chars().count(), COMMENT_MAX_CHARS)}
                    </span>
                    {move || {
                        edit_error
                            .get()
                            .map(|message| {
                                view! {
                                    <p class="text-sm text-red-600 dark:text-red-400">{message}</p>
                                }
                            })
                    }}
                    <div class="flex gap-2">
                        <Button disabled=update_pending on_click=Callback::new(save_edit)>
                            "Guardar"
                        </Button>
                        <button
                            type="button"
                            class="px-4 py-2 text-sm font-medium text-gray-700 bg-white border border-gray-300 rounded-lg hover:bg-gray-50 dark:bg-gray-800 dark:text-gray-300 dark:border-gray-600 dark:hover:bg-gray-700"
                            on:click=move |_| editing.set(false)
                        >
                            "Cancelar"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || is_own.get() && !editing.get()>
                <div class="flex gap-3 text-xs">
                    <button
                        type="button"
                        class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                        on:click=move |_| editing.set(true)
                    >
                        "Editar"
                    </button>
                    <button
                        type="button"
                        class="text-red-600 hover:text-red-800 dark:text-red-400"
                        on:click=move |_| confirm_delete.set(true)
                    >
                        "Eliminar"
                    </button>
                </div>
            </Show>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Eliminar comentario".to_string()
                    message="¿Seguro que quieres eliminar este comentario? Esta acción no se puede deshacer."
                        .to_string()
                    pending=delete_pending
                    on_confirm=move |()| {
                        delete_action.dispatch(());
                    }
                    on_cancel=move |()| confirm_delete.set(false)
                />
            </Show>
        </li>
    }
}
