//! Password-recovery overlay: asks for an email and requests a reset link.
//! The response is deliberately the same whether or not the account exists.

use crate::app_lib::validate::{FieldErrors, Validator};
use crate::components::{Alert, AlertKind, Button, Modal, Spinner, use_toasts};
use crate::features::auth::client;
use crate::features::auth::types::RecoverPasswordRequest;
use crate::components::ui::form::{FieldErrorText, INPUT, LABEL};
use crate::routes::overlay::use_close_overlay;
use leptos::{ev::SubmitEvent, prelude::*};

#[component]
pub fn RecoverPasswordModal() -> impl IntoView {
    let toaster = use_toasts();
    let close_overlay = use_close_overlay();

    let (email, set_email) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (success, set_success) = signal(false);

    let recover_action = Action::new_local(move |email_value: &String| {
        let email_value = email_value.clone();
        async move {
            client::request_password_reset(&RecoverPasswordRequest { email: email_value }).await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = recover_action.value().get() {
            match result {
                Ok(()) => set_success.set(true),
                Err(err) => toaster.error(err.to_string()),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_field_errors.set(FieldErrors::default());
        set_success.set(false);

        let email_value = email.get_untracked().trim().to_string();
        let checked = Validator::new()
            .require("email", &email_value)
            .email("email", &email_value)
            .finish();

        match checked {
            Ok(()) => {
                recover_action.dispatch(email_value);
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <Modal
            title="Recuperar contraseña".to_string()
            on_close=Callback::new(move |()| close_overlay())
        >
            <p class="text-sm text-gray-500 dark:text-gray-400">
                "Escribe tu correo y te enviaremos un enlace para restablecer la contraseña."
            </p>
            <form class="mt-4 space-y-4" on:submit=on_submit>
                <div>
                    <label class=LABEL for="recover_email">"Correo"</label>
                    <input
                        id="recover_email"
                        type="email"
                        class=INPUT
                        autocomplete="email"
                        placeholder="nombre@correo.com"
                        prop:value=move || email.get()
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="email" />
                </div>

                <Button button_type="submit" disabled=recover_action.pending()>
                    "Enviar enlace"
                </Button>
                {move || {
                    recover_action
                        .pending()
                        .get()
                        .then_some(view! { <div class="mt-2"><Spinner /></div> })
                }}
                {move || {
                    success
                        .get()
                        .then_some(view! {
                            <div class="mt-2">
                                <Alert
                                    kind=AlertKind::Success
                                    message="Si el correo existe, el enlace está en camino."
                                        .to_string()
                                />
                            </div>
                        })
                }}
            </form>
        </Modal>
    }
}
