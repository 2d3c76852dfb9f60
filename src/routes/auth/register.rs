//! Registration overlay. Uses the strict password policy and the cross-field
//! confirmation check. On success it switches to the sign-in overlay while
//! keeping the original background page.

use crate::app_lib::validate::{FieldErrors, Validator};
use crate::components::{Alert, AlertKind, Button, Modal, Spinner, use_toasts};
use crate::features::auth::client;
use crate::features::auth::types::RegisterRequest;
use crate::components::ui::form::{FieldErrorText, INPUT, LABEL};
use crate::routes::overlay::use_close_overlay;
use crate::routes::paths;
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::hooks::use_navigate;

#[derive(Clone)]
struct RegisterInput {
    first_name: String,
    last_name: String,
    age: u8,
    email: String,
    password: String,
}

#[component]
pub fn RegisterModal() -> impl IntoView {
    let toaster = use_toasts();
    let close_overlay = use_close_overlay();
    let navigate = use_navigate();
    let navigate_login = navigate.clone();
    let navigate_on_success = navigate;

    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (age, set_age) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let (error, set_error) = signal(None::<String>);

    let register_action = Action::new_local(move |input: &RegisterInput| {
        let input = input.clone();
        async move {
            client::register(&RegisterRequest {
                first_name: input.first_name,
                last_name: input.last_name,
                age: input.age,
                email: input.email,
                password: input.password,
                is_boss: false,
            })
            .await
        }
    });

    Effect::new(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(_) => {
                    toaster.success("Cuenta creada. Ya puedes iniciar sesión.");
                    // Switch overlays without touching the recorded background.
                    navigate_on_success(paths::LOGIN, Default::default());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_field_errors.set(FieldErrors::default());

        let first_name_value = first_name.get_untracked().trim().to_string();
        let last_name_value = last_name.get_untracked().trim().to_string();
        let age_value = age.get_untracked();
        let email_value = email.get_untracked().trim().to_string();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let checked = Validator::new()
            .require("first_name", &first_name_value)
            .require("last_name", &last_name_value)
            .min_age("age", &age_value)
            .require("email", &email_value)
            .email("email", &email_value)
            .strong_password("password", &password_value)
            .matches("confirm_password", &confirm_value, &password_value)
            .finish();

        match checked {
            Ok(()) => {
                let Ok(age_parsed) = age_value.trim().parse::<u8>() else {
                    return;
                };
                register_action.dispatch(RegisterInput {
                    first_name: first_name_value,
                    last_name: last_name_value,
                    age: age_parsed,
                    email: email_value,
                    password: password_value,
                });
            }
            Err(errors) => set_field_errors.set(errors),
        }
    };

    view! {
        <Modal
            title="Crear cuenta".to_string()
            on_close=Callback::new(move |()| close_overlay())
        >
            <form class="space-y-4" on:submit=on_submit>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class=LABEL for="register_first_name">"Nombre"</label>
                        <input
                            id="register_first_name"
                            type="text"
                            class=INPUT
                            autocomplete="given-name"
                            prop:value=move || first_name.get()
                            on:input=move |event| set_first_name.set(event_target_value(&event))
                        />
                        <FieldErrorText errors=field_errors field="first_name" />
                    </div>
                    <div>
                        <label class=LABEL for="register_last_name">"Apellidos"</label>
                        <input
                            id="register_last_name"
                            type="text"
                            class=INPUT
                            autocomplete="family-name"
                            prop:value=move || last_name.get()
                            on:input=move |event| set_last_name.set(event_target_value(&event))
                        />
                        <FieldErrorText errors=field_errors field="last_name" />
                    </div>
                </div>
                <div>
                    <label class=LABEL for="register_age">"Edad"</label>
                    <input
                        id="register_age"
                        type="number"
                        min="18"
                        class=INPUT
                        prop:value=move || age.get()
                        on:input=move |event| set_age.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="age" />
                </div>
                <div>
                    <label class=LABEL for="register_email">"Correo"</label>
                    <input
                        id="register_email"
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
                    <label class=LABEL for="register_password">"Contraseña"</label>
                    <input
                        id="register_password"
                        type="password"
                        class=INPUT
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |event| set_password.set(event_target_value(&event))
                    />
                    <FieldErrorText errors=field_errors field="password" />
                </div>
                <div>
                    <label class=LABEL for="register_confirm_password">
                        "Confirmar contraseña"
                    </label>
                    <input
                        id="register_confirm_password"
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

                <Button button_type="submit" disabled=register_action.pending()>
                    "Crear cuenta"
                </Button>
                {move || {
                    register_action
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

            <div class="mt-6 text-sm">
                <button
                    type="button"
                    class="text-blue-600 hover:text-blue-800 dark:text-blue-400"
                    on:click=move |_| navigate_login(paths::LOGIN, Default::default())
                >
                    "¿Ya tienes cuenta? Inicia sesión"
                </button>
            </div>
        </Modal>
    }
}
