//! Login page. Returns to `redirect` after a successful sign-in.

use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::Route;

#[component]
pub fn Login(redirect: String) -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let entering = session.clone();
    use_hook(move || {
        let mut auth = auth;
        entering.clear_form_error(&mut auth);
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        let redirect = redirect.clone();
        spawn(async move {
            let mut auth = auth;
            let (email, password) = (email(), password());
            submitting.set(true);
            let result = session.login(&email, &password, &mut auth).await;
            submitting.set(false);
            match result {
                Ok(Some(_)) => {
                    nav.push(Route::after_login(&redirect));
                }
                Ok(None) => tracing::info!("Login for {} was overtaken", email),
                Err(e) => tracing::info!("Login for {} failed: {}", email, e),
            }
        });
    };

    let error = auth().error;

    rsx! {
        div {
            class: "auth-container",
            h1 { "Login" }
            if let Some(error) = error {
                div { class: "error-message", "{error}" }
            }
            form {
                class: "auth-form",
                onsubmit: onsubmit,
                div {
                    class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Login" }
                }
            }
            p {
                "Don't have an account? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
