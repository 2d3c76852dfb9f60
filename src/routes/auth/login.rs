//! Sign-in overlay. Validation here is the permissive legacy policy (six
//! characters, no complexity); registration enforces the stricter one. The
//! mismatch mirrors the deployed services and is documented in DESIGN.md.

use crate::app_lib::validate::{FieldErrors, Validator};
use crate::components::{Alert, AlertKind, Button, Modal, Spinner, use_toasts};
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::features::auth::client;
use crate::components::ui::form::{FieldErrorText, INPUT, LABEL};
use crate::routes::overlay::use_close_overlay;
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct LoginInput {
    email: String,
    password: String,
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = use_auth();
    let toaster = use_toasts();
    let close_overlay = use_close_overlay();
    let close_on_cancel = close_overlay.clone();
    let close_on_success = close_overlay;
    let navigate = use_navigate();
    let navigate_register = navigate.clone();
    let navigate_recover = navigate;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (error, set_error) = signal(None::<String>);

    let login_action = Action::new_local(move |input: &LoginInput| {
        let input = input.clone();
        async move {
            client::login(&LoginRequest {
                email: input.email,
                password: input.password,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    auth.mark_logged_in();
                    toaster.success("Sesión iniciada.");
                    close_on_success();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_errors.set(FieldErrors::default());

        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();

        let checked = Validator::new()
            .require("email", &email_value)
            .email("email", &email_value)
            .login_password("password", &password_value)
            .finish();

        match checked {
            Ok(()) => {
                login_action.dispatch(LoginInput {
                    email: email_value,
                    password: password_value,
                });
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <Modal
            title="Iniciar sesión".to_string()
            on_close=Callback::new(move |()| close_on_cancel())
        >
            <form class="space-y-4" on:submit=on_submit>
                <div>
                    <label class=LABEL for="login_email">"Correo"</label>
                    <input
                        id="login_email"
                        type="email"
                        class=INPUT
                        autocomplete="email"
                        placeholder="nombre@correo.com"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="email" />
                </div>
                <div>
                    <label class=LABEL for="login_password">"Contraseña"</label>
                    <input
                        id="login_password"
                        type="password"
                        class=INPUT
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="password" />
                </div>

                <Button button_type="submit" disabled=login_action.pending()>
                    "Entrar"
                </Button>
                {move || {
                    login_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-2"><Spinner /></div> })
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! {
                                <div class="mt-2">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
            </form>

            <div class="mt-6 flex flex-col gap-2 text-sm">
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-800 dark:text-blue-400 text-left"
                    on:click=move |_| navigate_recover(paths::RECOVER_PASSWORD, Default::default())
                >
                    "¿Has olvidado tu contraseña?"
                </button>
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-800 dark:text-blue-400 text-left"
                    on:click=move |_| navigate_register(paths::REGISTER, Default::default())
                >
                    "¿No tienes cuenta? Regístrate"
                </button>
            </div>
        </Modal>
    }
}
