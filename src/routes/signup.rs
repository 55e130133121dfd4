use dioxus::prelude::*;

use crate::context::use_auth;
use crate::routes::Route;
use crate::utils::validation::validate_credentials;
use crate::utils::FormState;

#[component]
pub fn Signup() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(|| FormState::Idle);
    let mut awaiting_confirmation = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        if state.read().is_submitting() {
            return;
        }

        let email_val = email.read().trim().to_string();
        let password_val = password.read().clone();
        if let Err(msg) = validate_credentials(&email_val, &password_val) {
            state.set(FormState::Failed(msg));
            return;
        }

        state.set(FormState::Submitting);
        spawn(async move {
            match auth.sign_up(email_val, password_val).await {
                Ok(true) => {
                    state.set(FormState::Done);
                    nav.push(Route::Dashboard {});
                }
                Ok(false) => {
                    state.set(FormState::Done);
                    awaiting_confirmation.set(true);
                }
                Err(msg) => state.set(FormState::Failed(msg)),
            }
        });
    };

    let submit_label = state.read().label("Create account", "Creating account...").to_string();

    rsx! {
        div {
            class: "container mx-auto px-4 py-24 max-w-md",
            div {
                class: "rounded-xl border border-border/50 bg-card p-6",
                div {
                    class: "mb-6",
                    h1 { class: "text-2xl font-semibold", "Sign up" }
                    p { class: "text-sm text-muted-foreground", "Create a new account" }
                }

                if awaiting_confirmation() {
                    div {
                        class: "space-y-2",
                        p { class: "text-sm", "Check your inbox at {email} to confirm your account, then log in." }
                        Link { to: Route::Login {}, class: "text-sm underline", "Go to login" }
                    }
                } else {
                    form {
                        class: "space-y-4",
                        onsubmit: on_submit,
                        input {
                            r#type: "email",
                            class: "w-full px-3 py-2 rounded-md bg-background border border-border",
                            placeholder: "Email",
                            required: true,
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                        input {
                            r#type: "password",
                            class: "w-full px-3 py-2 rounded-md bg-background border border-border",
                            placeholder: "Password",
                            required: true,
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                        if let Some(error) = state.read().error() {
                            p { class: "text-sm text-red-600", "{error}" }
                        }
                        button {
                            r#type: "submit",
                            class: "w-full py-2 rounded-md bg-primary text-primary-foreground hover:bg-primary/90 disabled:opacity-50",
                            disabled: state.read().is_submitting(),
                            "{submit_label}"
                        }
                    }
                }

                p {
                    class: "text-sm text-muted-foreground mt-4",
                    "Have an account? "
                    Link { to: Route::Login {}, class: "underline", "Log in" }
                }
            }
        }
    }
}
