//! Shared layout wrapper with navigation and content container. It centralizes
//! header markup and the mobile menu toggle so routes can focus on content.
//! Navigation remains client-side; the API enforces real access control.

use crate::features::auth::state::use_auth;
use crate::routes::overlay::use_open_overlay;
use crate::routes::paths;
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let auth = use_auth();
    let is_logged_in = auth.is_logged_in;
    let open_overlay = use_open_overlay();
    let open_login = open_overlay.clone();
    let open_register = open_overlay;

    let nav_link_class = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0 dark:text-white md:dark:hover:text-blue-500 dark:hover:bg-gray-700 dark:hover:text-white md:dark:hover:bg-transparent";

    view! {
        <div class="min-h-screen flex flex-col">
            <header class="border-gray-200 dark:bg-gray-900">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=move || {
                            if is_logged_in.get() {
                                paths::DISCOVER.to_string()
                            } else {
                                paths::HOME.to_string()
                            }
                        }
                        {..}
                        class="flex items-center space-x-3 rtl:space-x-reverse"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <img src="/logo.svg" class="h-8" alt="cartelera" />
                        <span class="font-semibold whitespace-nowrap dark:text-white">
                            "Cartelera"
                        </span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200 dark:text-gray-400 dark:hover:bg-gray-700 dark:focus:ring-gray-600"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Abrir menú"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 rtl:space-x-reverse md:mt-0 md:border-0 md:bg-white dark:bg-gray-800 md:dark:bg-gray-900 dark:border-gray-700">
                            <Show
                                when=move || is_logged_in.get()
                                fallback=move || {
                                    let open_login = open_login.clone();
                                    let open_register = open_register.clone();
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class=nav_link_class
                                                on:click=move |_| {
                                                    set_menu_open.set(false);
                                                    open_login(paths::LOGIN);
                                                }
                                            >
                                                "Iniciar sesión"
                                            </button>
                                        </li>
                                        <li>
                                            <button
                                                type="button"
                                                class=nav_link_class
                                                on:click=move |_| {
                                                    set_menu_open.set(false);
                                                    open_register(paths::REGISTER);
                                                }
                                            >
                                                "Registrarse"
                                            </button>
                                        </li>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href={paths::DISCOVER}
                                        {..}
                                        class=nav_link_class
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Descubre"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::FAVORITES}
                                        {..}
                                        class=nav_link_class
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Favoritos"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::PROFILE}
                                        {..}
                                        class=nav_link_class
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Perfil"
                                    </A>
                                </li>
                                <li>
                                    <A
                                        href={paths::SETTINGS}
                                        {..}
                                        class=nav_link_class
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Configuración"
                                    </A>
                                </li>
                                <li>
                                    <button
                                        type="button"
                                        class=nav_link_class
                                        on:click=move |_| {
                                            spawn_local(async move {
                                                auth.sign_out().await;
                                            });
                                            set_menu_open.set(false);
                                        }
                                    >
                                        "Cerrar sesión"
                                    </button>
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">
                    {children()}
                </div>
            </main>
        </div>
    }
}
