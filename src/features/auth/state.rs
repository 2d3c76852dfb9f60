//! Auth session state and context for the frontend. The provider probes the
//! session once on mount using the cookie-based status endpoint and exposes
//! the signed-in and loading flags for guards and routes. No credential
//! material is stored in memory; cookies remain `HttpOnly`.

use crate::features::auth::client;
use leptos::{prelude::*, task::spawn_local};

/// Key for the signed-in hint kept in `localStorage`. It is only a hint for
/// returning visitors; the session probe is authoritative.
const SESSION_HINT_KEY: &str = "cartelera_session";

#[derive(Clone, Copy)]
/// Auth session context shared through Leptos.
pub struct AuthContext {
    pub is_logged_in: RwSignal<bool>,
    pub is_loading: RwSignal<bool>,
}

impl AuthContext {
    fn new(is_logged_in: RwSignal<bool>, is_loading: RwSignal<bool>) -> Self {
        Self {
            is_logged_in,
            is_loading,
        }
    }

    /// Marks the user signed in after a successful login.
    pub fn mark_logged_in(&self) {
        self.is_logged_in.set(true);
        write_session_hint(true);
    }

    /// Clears the local flag and invalidates the server-side session. The
    /// loading flag covers the transition so guards show a neutral state.
    pub async fn sign_out(self) {
        self.is_loading.set(true);
        // A failed logout call still clears local state; the cookie expires
        // server-side on its own.
        let _ = client::logout().await;
        self.is_logged_in.set(false);
        write_session_hint(false);
        self.is_loading.set(false);
    }
}

/// Provides auth context and probes the session once on mount.
///
/// A 401 means anonymous; any other delivered status means signed in. A
/// transport failure counts as anonymous (fail-closed) and is not surfaced.
/// The loading flag clears as soon as the probe resolves.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let is_logged_in = RwSignal::new(false);
    let is_loading = RwSignal::new(true);
    let auth = AuthContext::new(is_logged_in, is_loading);
    provide_context(auth);

    spawn_local(async move {
        let logged_in = match client::session_status().await {
            Ok(401) => false,
            Ok(_) => true,
            Err(_) => false,
        };
        is_logged_in.set(logged_in);
        write_session_hint(logged_in);
        is_loading.set(false);
    });

    view! { {children()} }
}

/// Returns the current auth context or a fallback anonymous context.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        AuthContext::new(RwSignal::new(false), RwSignal::new(false))
    })
}

fn write_session_hint(logged_in: bool) {
    let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok()).flatten() else {
        return;
    };
    if logged_in {
        let _ = storage.set_item(SESSION_HINT_KEY, "1");
    } else {
        let _ = storage.remove_item(SESSION_HINT_KEY);
    }
}
