//! New-password overlay reached from the reset email. The token travels in
//! the `token` query parameter; submitting requires both password fields to
//! match under the strict policy.

use crate::app_lib::validate::{FieldErrors, Validator};
use crate::components::{Alert, AlertKind, Button, Modal, Spinner, use_toasts};
use crate::features::auth::client;
use crate::features::auth::types::NewPasswordRequest;
use crate::components::ui::form::{FieldErrorText, INPUT, LABEL};
use crate::routes::overlay::use_close_overlay;
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::{use_navigate, use_query_map};

#[derive(Clone)]
struct NewPasswordInput {
    token: String,
    password: String,
}

#[component]
pub fn NewPasswordModal() -> impl IntoView {
    let toaster = use_toasts();
    let close_overlay = use_close_overlay();
    let navigate = use_navigate();

    let query = use_query_map();
    let token = Memo::new(move |_| query.get().get("token").filter(|value| !value.is_empty()));

    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (error, set_error) = signal(None::<String>);

    let submit_action = Action::new_local(move |input: &NewPasswordInput| {
        let input = input.clone();
        async move {
            client::submit_new_password(&NewPasswordRequest {
                token: input.token,
                password: input.password,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(()) => {
                    toaster.success("Contraseña restablecida. Inicia sesión.");
                    navigate(paths::LOGIN, Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_errors.set(FieldErrors::default());

        let Some(token_value) = token.get_untracked() else {
            return;
        };
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let checked = Validator::new()
            .strong_password("password", &password_value)
            .matches("confirm_password", &confirm_value, &password_value)
            .finish();

        match checked {
            Ok(()) => {
                submit_action.dispatch(NewPasswordInput {
                    token: token_value,
                    password: password_value,
                });
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <Modal
            title="Nueva contraseña".to_string()
            on_close=Callback::new(move |()| close_overlay())
        >
            {move || {
                if token.get().is_none() {
                    view! {
                        <Alert
                            kind=AlertKind::Error
                            message="Falta el código de restablecimiento. Revisa el enlace del correo."
                                .to_string()
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <form class="space-y-4" on:submit=on_submit>
                            <div>
                                <label class=LABEL for="new_password">"Nueva contraseña"</label>
                                <input
                                    id="new_password"
                                    type="password"
                                    class=INPUT
                                    autocomplete="new-password"
                                    prop:value=move || password.get()
                                    on:input=move |event| {
                                        set_password.set(event_target_value(&event));
                                    }
                                />
                                <FieldErrorText errors=field_errors field="password" />
                            </div>
                            <div>
                                <label class=LABEL for="new_confirm_password">
                                    "Confirmar contraseña"
                                </label>
                                <input
                                    id="new_confirm_password"
                                    type="password"
                                    class=INPUT
                                    autocomplete="new-password"
                                    prop:value=move || confirm_password.get()
                                    on:input=move |event| {
                                        set_confirm_password.set(event_target_value(&event));
                                    }
                                />
                                <FieldErrorText errors=field_errors field="confirm_password" />
                            </div>

                            <Button button_type="submit" disabled=submit_action.pending()>
                                "Guardar contraseña"
                            </Button>
                            {move || {
                                submit_action
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
                    }
                    .into_any()
                }
            }}
        </Modal>
    }
}
