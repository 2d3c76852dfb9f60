//! Route guards implemented as layout routes. Both hold a neutral loading
//! state until the session probe resolves so the wrong tree never flashes.
//! These are UX-only guards; real access control lives on the API.

use crate::features::auth::state::use_auth;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

/// Full-screen neutral state shown while the session probe is in flight.
#[component]
fn SessionPending() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center min-h-screen bg-white dark:bg-gray-900">
            <div class="animate-pulse text-gray-400">"Cargando..."</div>
        </div>
    }
}

/// Renders nested routes only for anonymous visitors; signed-in users are
/// sent to the authenticated home.
#[component]
pub fn PublicOnlyLayout() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            if auth.is_loading.get() {
                view! { <SessionPending /> }.into_any()
            } else if auth.is_logged_in.get() {
                view! { <Redirect path=paths::DISCOVER /> }.into_any()
            } else {
                view! { <Outlet /> }.into_any()
            }
        }}
    }
}

/// Renders nested routes only for signed-in users; anonymous visitors are
/// sent to the public landing page.
#[component]
pub fn RequireAuthLayout() -> impl IntoView {
    let auth = use_auth();

    view! {
        {move || {
            if auth.is_loading.get() {
                view! { <SessionPending /> }.into_any()
            } else if auth.is_logged_in.get() {
                view! { <Outlet /> }.into_any()
            } else {
                view! { <Redirect path=paths::HOME /> }.into_any()
            }
        }}
    }
}
