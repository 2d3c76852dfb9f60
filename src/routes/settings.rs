//! Settings route: profile edits, password change, and account deletion.

use crate::app_lib::validate::{FieldErrors, Validator};
use crate::components::ui::form::{FieldErrorText, INPUT, LABEL};
use crate::components::{Alert, AlertKind, AppShell, Button, ConfirmDialog, Spinner, use_toasts};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::ChangePasswordRequest;
use crate::features::profile::client;
use crate::features::profile::types::UpdateProfileRequest;
use leptos::prelude::*;

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="max-w-lg mx-auto space-y-10">
                <h1 class="text-2xl font-semibold text-gray-900 dark:text-white">
                    "Configuración"
                </h1>
                <ProfileForm />
                <ChangePasswordForm />
                <DeleteAccountSection />
            </div>
        </AppShell>
    }
}

#[derive(Clone)]
struct ProfileInput {
    first_name: String,
    last_name: String,
    age: u8,
    email: String,
}

#[component]
fn ProfileForm() -> impl IntoView {
    let toaster = use_toasts();
    let profile = LocalResource::new(move || async move { client::fetch().await });

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let seeded = StoredValue::new(false);

    // Seed the form once the profile arrives; later edits are not clobbered.
    Effect::new(move |_| {
        if seeded.get_value() {
            return;
        }
        if let Some(Ok(profile)) = profile.get() {
            set_first_name.set(profile.first_name);
            set_last_name.set(profile.last_name);
            set_age.set(profile.age.to_string());
            set_email.set(profile.email);
            seeded.set_value(true);
        }
    });

    let save_action = Action::new_local(move |input: &ProfileInput| {
        let input = input.clone();
        async move {
            client::update(&UpdateProfileRequest {
                first_name: input.first_name,
                last_name: input.last_name,
                age: input.age,
                email: input.email,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => toaster.success("Perfil actualizado."),
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::default());

        let first_name_value = first_name.get_untracked().trim().to_string();
        let last_name_value = last_name.get_untracked().trim().to_string();
        let age_value = age.get_untracked();
        let email_value = email.get_untracked().trim().to_string();

        let checked = Validator::new()
            .require("first_name", &first_name_value)
            .require("last_name", &last_name_value)
            .min_age("age", &age_value)
            .require("email", &email_value)
            .email("email", &email_value)
            .finish();

        match checked {
            Ok(()) => {
                // min_age already proved the parse succeeds.
                let Ok(age_parsed) = age_value.trim().parse::<u8>() else {
                    return;
                };
                save_action.dispatch(ProfileInput {
                    first_name: first_name_value,
                    last_name: last_name_value,
                    age: age_parsed,
                    email: email_value,
                });
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">"Perfil"</h2>
            {move || {
                profile
                    .get()
                    .is_none()
                    .then_some(view! { <div class="py-4"><Spinner /></div> })
            }}
            {move || match profile.get() {
                Some(Err(err)) => Some(view! {
                    <Alert kind=AlertKind::Error message=err.to_string() />
                }),
                _ => None,
            }}
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class=LABEL for="first_name">"Nombre"</label>
                    <input
                        id="first_name"
                        type="text"
                        class=INPUT
                        prop:value=move || first_name.get()
                        on:input=move |event| set_first_name.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="first_name" />
                </div>
                <div>
                    <label class=LABEL for="last_name">"Apellidos"</label>
                    <input
                        id="last_name"
                        type="text"
                        class=INPUT
                        prop:value=move || last_name.get()
                        on:input=move |event| set_last_name.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="last_name" />
                </div>
                <div>
                    <label class=LABEL for="age">"Edad"</label>
                    <input
                        id="age"
                        type="number"
                        min="18"
                        class=INPUT
                        prop:value=move || age.get()
                        on:input=move |event| set_age.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="age" />
                </div>
                <div>
                    <label class=LABEL for="email">"Correo"</label>
                    <input
                        id="email"
                        type="email"
                        class=INPUT
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="email" />
                </div>
                <Button button_type="submit" disabled=save_action.pending()>
                    "Guardar cambios"
                </Button>
            </form>
        </section>
    }
}

#[derive(Clone)]
struct ChangePasswordInput {
    current_password: String,
    new_password: String,
}

#[component]
fn ChangePasswordForm() -> impl IntoView {
    let toaster = use_toasts();
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());

    let change_action = Action::new_local(move |input: &ChangePasswordInput| {
        let input = input.clone();
        async move {
            client::change_password(&ChangePasswordRequest {
                current_password: input.current_password,
                new_password: input.new_password,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = change_action.value().get() {
            match result {
                Ok(()) => {
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    toaster.success("Contraseña actualizada.");
                }
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::default());

        let current_value = current_password.get_untracked();
        let new_value = new_password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let checked = Validator::new()
            .require("current_password", &current_value)
            .strong_password("new_password", &new_value)
            .matches("confirm_password", &confirm_value, &new_value)
            .finish();

        match checked {
            Ok(()) => {
                change_action.dispatch(ChangePasswordInput {
                    current_password: current_value,
                    new_password: new_value,
                });
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-gray-900 dark:text-white">
                "Cambiar contraseña"
            </h2>
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class=LABEL for="current_password">"Contraseña actual"</label>
                    <input
                        id="current_password"
                        type="password"
                        class=INPUT
                        autocomplete="current-password"
                        prop:value=move || current_password.get()
                        on:input=move |event| set_current_password.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="current_password" />
                </div>
                <div>
                    <label class=LABEL for="new_password">"Nueva contraseña"</label>
                    <input
                        id="new_password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        prop:value=move || new_password.get()
                        on:input=move |event| set_new_password.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="new_password" />
                </div>
                <div>
                    <label class=LABEL for="confirm_password">"Confirmar contraseña"</label>
                    <input
                        id="confirm_password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        prop:value=move || confirm_password.get()
                        on:input=move |event| set_confirm_password.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="confirm_password" />
                </div>
                <Button button_type="submit" disabled=change_action.pending()>
                    "Actualizar contraseña"
                </Button>
            </form>
        </section>
    }
}

#[component]
fn DeleteAccountSection() -> impl IntoView {
    let toaster = use_toasts();
    let auth = use_auth();
    let confirm_open = RwSignal::new(false);

    let delete_action = Action::new_local(move |(): &()| async move {
        client::delete_account().await?;
        // The session is gone server-side; clear the local flags too. The
        // guard redirect takes over once the flag flips.
        auth.sign_out().await;
        Ok::<(), crate::app_lib::AppError>(())
    });

    Effect::new(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    confirm_open.set(false);
                    toaster.success("Cuenta eliminada.");
                }
                Err(err) => {
                    confirm_open.set(false);
                    toaster.error(err.to_string());
                }
            }
        }
    });

    view! {
        <section class="space-y-4">
            <h2 class="text-lg font-semibold text-red-700 dark:text-red-400">
                "Eliminar cuenta"
            </h2>
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Se borrarán tu perfil, tus favoritos y tus comentarios."
            </p>
            <button
                type="button"
                class="px-5 py-2.5 text-sm font-medium text-white bg-red-600 rounded-lg hover:bg-red-700 focus:ring-4 focus:ring-red-300 dark:focus:ring-red-800"
                on:click=move |_| confirm_open.set(true)
            >
                "Eliminar mi cuenta"
            </button>

            <Show when=move || confirm_open.get()>
                <ConfirmDialog
                    title="Eliminar cuenta".to_string()
                    message="Esta acción es permanente. ¿Seguro que quieres continuar?"
                        .to_string()
                    pending=delete_action.pending()
                    on_confirm=move |()| {
                        delete_action.dispatch(());
                    }
                    on_cancel=move |()| confirm_open.set(false)
                />
            </Show>
        </section>
    }
}
