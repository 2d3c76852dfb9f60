//! Transient notifications for async action outcomes. A context holds the
//! visible toasts; each one dismisses itself after a few seconds.

use crate::components::ui::alert::{Alert, AlertKind};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// How long a toast stays visible (milliseconds).
const TOAST_DURATION_MS: u32 = 4_500;

#[derive(Clone)]
struct Toast {
    id: u32,
    kind: AlertKind,
    message: String,
}

#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u32>,
}

impl Toaster {
    fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(AlertKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(AlertKind::Error, message.into());
    }

    fn push(&self, kind: AlertKind, message: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));

        let toasts = self.toasts;
        toasts.update(|list| list.push(Toast { id, kind, message }));
        Timeout::new(TOAST_DURATION_MS, move || {
            toasts.update(|list| list.retain(|toast| toast.id != id));
        })
        .forget();
    }
}

/// Provides the toaster context; call once at the app root.
pub fn provide_toaster() {
    provide_context(Toaster::new());
}

/// Returns the toaster, or a detached fallback outside the provider.
pub fn use_toasts() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(Toaster::new)
}

/// Renders the toast stack; mount once, above the router.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toasts();
    let toasts = toaster.toasts;

    view! {
        <div class="fixed bottom-4 right-4 z-[60] flex flex-col gap-2 w-80 max-w-[90vw]">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=|toast| view! { <Alert kind=toast.kind message=toast.message /> }
            />
        </div>
    }
}
