use api::RegisterRequest;
use dioxus::prelude::*;
use ui::{use_auth, use_session};

use crate::Route;

const PASSWORD_MISMATCH: &str = "Passwords do not match";

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut account = use_signal(RegisterRequest::default);
    let mut confirm = use_signal(String::new);
    let mut mismatch = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let entering = session.clone();
    use_hook(move || {
        let mut auth = auth;
        entering.clear_error(&mut auth);
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = account();
        if request.password != confirm() {
            mismatch.set(true);
            return;
        }
        mismatch.set(false);
        let session = session.clone();
        spawn(async move {
            let mut auth = auth;
            submitting.set(true);
            let result = session.register(&request, &mut auth).await;
            submitting.set(false);
            if result.is_ok() {
                tracing::info!("Registered {}", request.email);
                nav.push(Route::login_then(""));
            }
        });
    };

    let error = if mismatch() {
        Some(PASSWORD_MISMATCH.to_string())
    } else {
        auth().error
    };

    rsx! {
        div {
            class: "auth-container",
            h1 { "Create an Account" }
            if let Some(error) = error {
                div { class: "error-message", "{error}" }
            }
            form {
                class: "auth-form",
                onsubmit: onsubmit,
                div {
                    class: "form-row",
                    div {
                        class: "form-group",
                        label { r#for: "firstName", "First Name" }
                        input {
                            id: "firstName",
                            required: true,
                            value: account.read().first_name.clone(),
                            oninput: move |evt| account.write().first_name = evt.value(),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "lastName", "Last Name" }
                        input {
                            id: "lastName",
                            required: true,
                            value: account.read().last_name.clone(),
                            oninput: move |evt| account.write().last_name = evt.value(),
                        }
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        required: true,
                        value: account.read().email.clone(),
                        oninput: move |evt| account.write().email = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        required: true,
                        value: account.read().password.clone(),
                        oninput: move |evt| account.write().password = evt.value(),
                    }
                }
                div {
                    class: "form-group",
                    label { r#for: "confirmPassword", "Confirm Password" }
                    input {
                        id: "confirmPassword",
                        r#type: "password",
                        required: true,
                        value: confirm(),
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Register" }
                }
            }
            p {
                "Already have an account? "
                Link { to: Route::login_then(""), "Login" }
            }
        }
    }
}
