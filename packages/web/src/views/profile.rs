use dioxus::prelude::*;
use ui::profile::update_profile;
use ui::{use_auth, use_session, ProfileDraft};

use super::Protected;

#[component]
pub fn Profile() -> Element {
    rsx! {
        Protected { ProfileForm {} }
    }
}

/// Text input bound to one field of the draft.
fn bind(
    mut form: Signal<ProfileDraft>,
    field: fn(&mut ProfileDraft) -> &mut String,
) -> impl FnMut(FormEvent) {
    move |evt| *field(&mut form.write()) = evt.value()
}

#[component]
fn ProfileForm() -> Element {
    let auth = use_auth();
    let session = use_session();
    let mut form = use_signal(|| {
        auth.peek()
            .user()
            .map(ProfileDraft::from_user)
            .unwrap_or_default()
    });
    let mut result = use_signal(|| Option::<Result<&'static str, String>>::None);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            let mut auth = auth;
            let draft = form();
            saving.set(true);
            let outcome = update_profile(&session, &mut auth, &draft).await;
            saving.set(false);
            if outcome.is_ok() {
                form.write().clear_passwords();
            }
            result.set(Some(outcome));
        });
    };

    let draft = form();

    rsx! {
        div {
            class: "profile-container",
            h1 { "My Profile" }
            div {
                class: "profile-card",
                match result() {
                    Some(Ok(message)) => rsx! { div { class: "success-message", "{message}" } },
                    Some(Err(error)) => rsx! { div { class: "error-message", "{error}" } },
                    None => rsx! {},
                }
                form {
                    class: "profile-form",
                    onsubmit: onsubmit,
                    section {
                        class: "form-section",
                        h2 { "Personal Information" }
                        div {
                            class: "form-row",
                            div {
                                class: "form-group",
                                label { r#for: "firstName", "First Name" }
                                input {
                                    id: "firstName",
                                    required: true,
                                    value: draft.first_name,
                                    oninput: bind(form, |d| &mut d.first_name),
                                }
                            }
                            div {
                                class: "form-group",
                                label { r#for: "lastName", "Last Name" }
                                input {
                                    id: "lastName",
                                    required: true,
                                    value: draft.last_name,
                                    oninput: bind(form, |d| &mut d.last_name),
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "email", "Email" }
                            input { id: "email", r#type: "email", disabled: true, value: draft.email }
                            small { "Email cannot be changed" }
                        }
                    }
                    section {
                        class: "form-section",
                        h2 { "Change Password" }
                        div {
                            class: "form-group",
                            label { r#for: "currentPassword", "Current Password" }
                            input {
                                id: "currentPassword",
                                r#type: "password",
                                value: draft.current_password,
                                oninput: bind(form, |d| &mut d.current_password),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "newPassword", "New Password" }
                            input {
                                id: "newPassword",
                                r#type: "password",
                                minlength: "6",
                                value: draft.new_password,
                                oninput: bind(form, |d| &mut d.new_password),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "confirmNewPassword", "Confirm New Password" }
                            input {
                                id: "confirmNewPassword",
                                r#type: "password",
                                value: draft.confirm_password,
                                oninput: bind(form, |d| &mut d.confirm_password),
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Updating..." } else { "Update Profile" }
                    }
                }
            }
        }
    }
}
