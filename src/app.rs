use crate::components::{ToastHost, provide_toaster};
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use crate::routes::overlay::provide_overlay_stack;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_toaster();
    provide_overlay_stack();

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
                <ToastHost />
            </Router>
        </AuthProvider>
    }
}
