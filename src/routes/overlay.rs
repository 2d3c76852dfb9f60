//! Two-layer view stack for the auth overlays. Navigating to a modal path
//! records the page the user was on as the *background*; the modal route then
//! renders that page underneath the dialog while the address bar shows the
//! modal path. Closing the overlay navigates back to the background, or to a
//! fixed fallback when none exists (direct load of a modal URL).

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// Holds the background path for the currently open overlay, if any.
#[derive(Clone, Copy)]
pub struct OverlayStack {
    background: RwSignal<Option<String>>,
}

impl OverlayStack {
    fn new() -> Self {
        Self {
            background: RwSignal::new(None),
        }
    }

    /// Records the page an overlay opened from. Opening one overlay from
    /// another (login ⇄ register links) keeps the original background.
    pub fn record(&self, from: String) {
        if is_overlay_path(&from) {
            return;
        }
        self.background.set(Some(from));
    }

    /// Reactive path of the base layer: the recorded background, or the
    /// fallback when the overlay was loaded directly.
    pub fn base_path(&self) -> String {
        self.background
            .get()
            .unwrap_or_else(|| paths::OVERLAY_FALLBACK.to_string())
    }

    /// Non-reactive read used by close handlers.
    pub fn close_target(&self) -> String {
        self.background
            .get_untracked()
            .unwrap_or_else(|| paths::OVERLAY_FALLBACK.to_string())
    }

    pub fn clear(&self) {
        if self.background.get_untracked().is_some() {
            self.background.set(None);
        }
    }
}

/// Provides the overlay stack; call once at the app root, inside the router.
pub fn provide_overlay_stack() {
    provide_context(OverlayStack::new());
}

/// Returns the overlay stack, or a detached fallback outside the provider.
pub fn use_overlay() -> OverlayStack {
    use_context::<OverlayStack>().unwrap_or_else(OverlayStack::new)
}

/// Hook returning a closure that opens a modal path, snapshotting the current
/// location as the background first.
pub fn use_open_overlay() -> impl Fn(&str) + Clone {
    let overlay = use_overlay();
    let navigate = use_navigate();
    let location = use_location();
    let pathname = location.pathname;
    let search = location.search;

    move |modal_path: &str| {
        overlay.record(join_path_and_search(
            &pathname.get_untracked(),
            &search.get_untracked(),
        ));
        navigate(modal_path, Default::default());
    }
}

/// Hook returning a closure that closes the current overlay, restoring the
/// background path (or the fallback).
pub fn use_close_overlay() -> impl Fn() + Clone {
    let overlay = use_overlay();
    let navigate = use_navigate();

    move || {
        let target = overlay.close_target();
        overlay.clear();
        navigate(&target, Default::default());
    }
}

/// Clears a stale background whenever navigation lands on a non-overlay path
/// by any means (back button, links, redirects). Mount once inside the
/// router.
#[component]
pub fn OverlayReset() -> impl IntoView {
    let overlay = use_overlay();
    let location = use_location();
    let pathname = location.pathname;

    Effect::new(move |_| {
        if !is_overlay_path(&pathname.get()) {
            overlay.clear();
        }
    });
}

/// Whether a path renders as an overlay above a background page.
pub fn is_overlay_path(path: &str) -> bool {
    let path = strip_query(path);
    path == paths::LOGIN
        || path == paths::REGISTER
        || path == paths::RECOVER_PASSWORD
        || path == paths::NEW_PASSWORD
}

/// The base page a background path resolves to. `Movie` carries the raw id
/// segment; the page parses it.
#[derive(Clone, Debug, PartialEq)]
pub enum BaseView {
    Home,
    Discover,
    Favorites,
    Profile,
    Settings,
    Sitemap,
    Movie(String),
    NotFound,
}

/// Resolves a recorded background path to its base page. Unknown paths fall
/// back to `NotFound` rather than crashing; overlay paths (which should never
/// be recorded) resolve to the fallback page.
pub fn base_for(path: &str) -> BaseView {
    let path = strip_query(path);
    let trimmed = if path.len() > 1 {
        path.trim_end_matches('/')
    } else {
        path
    };

    if is_overlay_path(trimmed) {
        return base_for(paths::OVERLAY_FALLBACK);
    }

    match trimmed {
        p if p == paths::HOME => BaseView::Home,
        p if p == paths::DISCOVER => BaseView::Discover,
        p if p == paths::FAVORITES => BaseView::Favorites,
        p if p == paths::PROFILE => BaseView::Profile,
        p if p == paths::SETTINGS => BaseView::Settings,
        p if p == paths::SITEMAP => BaseView::Sitemap,
        p => match p.strip_prefix(paths::MOVIE_PREFIX) {
            Some(rest) => {
                let id = rest.trim_start_matches('/');
                if id.is_empty() || id.contains('/') {
                    BaseView::NotFound
                } else {
                    BaseView::Movie(id.to_string())
                }
            }
            None => BaseView::NotFound,
        },
    }
}

fn strip_query(path: &str) -> &str {
    path.split(['?', '#']).next().unwrap_or(path)
}

fn join_path_and_search(pathname: &str, search: &str) -> String {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{search}")
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseView, base_for, is_overlay_path, join_path_and_search};

    #[test]
    fn overlay_paths_are_recognized_with_or_without_query() {
        assert!(is_overlay_path("/iniciar-sesion"));
        assert!(is_overlay_path("/registrarse"));
        assert!(is_overlay_path("/recuperar-contrasena"));
        assert!(is_overlay_path("/nueva-contrasena?token=abc"));
        assert!(!is_overlay_path("/favoritos"));
        assert!(!is_overlay_path("/"));
    }

    #[test]
    fn known_backgrounds_resolve_to_their_pages() {
        assert_eq!(base_for("/"), BaseView::Home);
        assert_eq!(base_for("/descubre"), BaseView::Discover);
        assert_eq!(base_for("/favoritos"), BaseView::Favorites);
        assert_eq!(base_for("/perfil"), BaseView::Profile);
        assert_eq!(base_for("/configuracion"), BaseView::Settings);
        assert_eq!(base_for("/mapa-sitio"), BaseView::Sitemap);
    }

    #[test]
    fn movie_backgrounds_keep_their_id() {
        assert_eq!(
            base_for("/pelicula/855321"),
            BaseView::Movie("855321".to_string())
        );
        assert_eq!(base_for("/pelicula/"), BaseView::NotFound);
        assert_eq!(base_for("/pelicula/1/extra"), BaseView::NotFound);
    }

    #[test]
    fn queries_and_trailing_slashes_are_ignored() {
        assert_eq!(base_for("/favoritos?page=2"), BaseView::Favorites);
        assert_eq!(base_for("/descubre/"), BaseView::Discover);
    }

    #[test]
    fn unknown_and_overlay_backgrounds_fall_back() {
        assert_eq!(base_for("/no-existe"), BaseView::NotFound);
        // An overlay path can never be its own background.
        assert_eq!(base_for("/iniciar-sesion"), BaseView::Home);
    }

    #[test]
    fn join_path_and_search_handles_both_shapes() {
        assert_eq!(join_path_and_search("/favoritos", ""), "/favoritos");
        assert_eq!(
            join_path_and_search("/descubre", "page=2"),
            "/descubre?page=2"
        );
        assert_eq!(
            join_path_and_search("/descubre", "?page=2"),
            "/descubre?page=2"
        );
    }
}
