//! Route table and the two-layer overlay composition. Modal paths render a
//! base page (resolved from the recorded background) underneath the dialog;
//! every other path renders through the guard layouts.

mod discover;
mod favorites;
mod home;
mod movie;
mod not_found;
mod profile;
mod settings;
mod sitemap;

pub(crate) mod auth;
pub(crate) mod overlay;
pub(crate) mod paths;

pub(crate) use discover::DiscoverPage;
pub(crate) use favorites::FavoritesPage;
pub(crate) use home::HomePage;
pub(crate) use movie::{MoviePage, MovieScreen};
pub(crate) use not_found::NotFoundPage;
pub(crate) use profile::ProfilePage;
pub(crate) use settings::SettingsPage;
pub(crate) use sitemap::SitemapPage;

use crate::features::auth::guards::{PublicOnlyLayout, RequireAuthLayout};
use auth::{LoginModal, NewPasswordModal, RecoverPasswordModal, RegisterModal};
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::path;
use overlay::{BaseView, OverlayReset, base_for, use_overlay};

#[derive(Clone, Copy, PartialEq)]
enum OverlayKind {
    Login,
    Register,
    RecoverPassword,
    NewPassword,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <OverlayReset />
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <ParentRoute path=path!("") view=PublicOnlyLayout>
                <Route path=path!("/") view=HomePage />
            </ParentRoute>
            <Route path=path!("/mapa-sitio") view=SitemapPage />
            <Route
                path=path!("/iniciar-sesion")
                view=|| view! { <OverlayRoute modal=OverlayKind::Login /> }
            />
            <Route
                path=path!("/registrarse")
                view=|| view! { <OverlayRoute modal=OverlayKind::Register /> }
            />
            <Route
                path=path!("/recuperar-contrasena")
                view=|| view! { <OverlayRoute modal=OverlayKind::RecoverPassword /> }
            />
            <Route
                path=path!("/nueva-contrasena")
                view=|| view! { <OverlayRoute modal=OverlayKind::NewPassword /> }
            />
            <ParentRoute path=path!("") view=RequireAuthLayout>
                <Route path=path!("/descubre") view=DiscoverPage />
                <Route path=path!("/favoritos") view=FavoritesPage />
                <Route path=path!("/pelicula/:id") view=MoviePage />
                <Route path=path!("/perfil") view=ProfilePage />
                <Route path=path!("/configuracion") view=SettingsPage />
            </ParentRoute>
        </Routes>
    }
}

/// One modal route: the base page underneath, the dialog on top.
#[component]
fn OverlayRoute(modal: OverlayKind) -> impl IntoView {
    view! {
        <BaseLayer />
        {match modal {
            OverlayKind::Login => view! { <LoginModal /> }.into_any(),
            OverlayKind::Register => view! { <RegisterModal /> }.into_any(),
            OverlayKind::RecoverPassword => view! { <RecoverPasswordModal /> }.into_any(),
            OverlayKind::NewPassword => view! { <NewPasswordModal /> }.into_any(),
        }}
    }
}

/// Resolves the recorded background (or the fallback) to a page. Rendered
/// directly, outside the guard layouts: the pages handle their own data
/// errors, and the dialog owns the interaction while it is open.
#[component]
fn BaseLayer() -> impl IntoView {
    let overlay = use_overlay();

    view! {
        {move || match base_for(&overlay.base_path()) {
            BaseView::Home => view! { <HomePage /> }.into_any(),
            BaseView::Discover => view! { <DiscoverPage /> }.into_any(),
            BaseView::Favorites => view! { <FavoritesPage /> }.into_any(),
            BaseView::Profile => view! { <ProfilePage /> }.into_any(),
            BaseView::Settings => view! { <SettingsPage /> }.into_any(),
            BaseView::Sitemap => view! { <SitemapPage /> }.into_any(),
            BaseView::Movie(id) => match id.parse::<u64>() {
                Ok(pexels_id) => view! { <MovieScreen pexels_id=pexels_id /> }.into_any(),
                Err(_) => view! { <NotFoundPage /> }.into_any(),
            },
            BaseView::NotFound => view! { <NotFoundPage /> }.into_any(),
        }}
    }
}
