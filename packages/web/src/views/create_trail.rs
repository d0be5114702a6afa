use api::Difficulty;
use dioxus::prelude::*;
use ui::icons::{FaPlus, FaTrash};
use ui::trail_form::{creation_gate, submit_trail};
use ui::{trail_path, use_auth, use_session, CreationGate, Icon, TrailDraft};

use super::Protected;

#[component]
pub fn CreateTrail() -> Element {
    rsx! {
        Protected { CreateTrailForm {} }
    }
}

/// Input handler writing one draft field by its form name.
fn set_field(mut draft: Signal<TrailDraft>, field: &'static str) -> impl FnMut(FormEvent) {
    move |evt| draft.write().set(field, evt.value())
}

#[component]
fn CreateTrailForm() -> Element {
    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(TrailDraft::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    if creation_gate(auth().user()) == CreationGate::AccessDenied {
        return rsx! {
            div {
                class: "access-denied",
                h1 { "Access Denied" }
                p { "You need administrator privileges to create trails." }
            }
        };
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            let mut auth = auth;
            let current = draft();
            saving.set(true);
            error.set(None);
            let result = submit_trail(&session, &mut auth, &current).await;
            saving.set(false);
            match result {
                Ok(trail) => {
                    nav.push(trail_path(trail.id));
                }
                Err(message) => error.set(Some(message)),
            }
        });
    };

    let form = draft();
    let difficulty = form.difficulty.as_str();
    let rows: Vec<(usize, String)> = form.dates().iter().cloned().enumerate().collect();
    let single_row = rows.len() == 1;

    rsx! {
        div {
            class: "create-trail-container",
            h1 { "Create New Trail" }
            if let Some(error) = error() {
                div { class: "error-message", "{error}" }
            }
            form {
                class: "create-trail-form",
                onsubmit: onsubmit,

                section {
                    class: "form-section",
                    h2 { "Basic Information" }
                    div {
                        class: "form-group",
                        label { r#for: "name", "Trail Name" }
                        input { id: "name", required: true, value: form.name.clone(), oninput: set_field(draft, "name") }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "description", "Description" }
                        textarea {
                            id: "description",
                            rows: "5",
                            required: true,
                            value: form.description.clone(),
                            oninput: set_field(draft, "description"),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "location", "Location" }
                        input { id: "location", required: true, value: form.location.clone(), oninput: set_field(draft, "location") }
                    }
                }

                section {
                    class: "form-section",
                    h2 { "Trail Details" }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "length", "Length (km)" }
                            input {
                                id: "length",
                                r#type: "number",
                                min: "0",
                                step: "0.1",
                                required: true,
                                value: form.length.clone(),
                                oninput: set_field(draft, "length"),
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "duration", "Duration (hours)" }
                            input {
                                id: "duration",
                                r#type: "number",
                                min: "0",
                                step: "0.5",
                                required: true,
                                value: form.duration.clone(),
                                oninput: set_field(draft, "duration"),
                            }
                        }
                    }
                    div {
                        class: "form-row",
                        div {
                            class: "form-group",
                            label { r#for: "difficulty", "Difficulty" }
                            select {
                                id: "difficulty",
                                value: difficulty,
                                onchange: set_field(draft, "difficulty"),
                                for (value, label) in Difficulty::ALL.iter().map(|d| (d.as_str(), d.label())) {
                                    option { value: value, "{label}" }
                                }
                            }
                        }
                        div {
                            class: "form-group",
                            label { r#for: "price", "Price (EUR)" }
                            input {
                                id: "price",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                required: true,
                                value: form.price.clone(),
                                oninput: set_field(draft, "price"),
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "features", "Features (comma separated)" }
                        input {
                            id: "features",
                            placeholder: "e.g. Waterfall, Lake view, Wildlife",
                            value: form.features.clone(),
                            oninput: set_field(draft, "features"),
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "imageUrl", "Image URL" }
                        input {
                            id: "imageUrl",
                            r#type: "url",
                            value: form.image_url.clone(),
                            oninput: set_field(draft, "imageUrl"),
                        }
                    }
                }

                section {
                    class: "form-section",
                    h2 { "Available Dates" }
                    for (index, value) in rows {
                        div {
                            key: "{index}",
                            class: "date-row",
                            input {
                                r#type: "date",
                                value: value,
                                oninput: move |evt| draft.write().set_date(index, evt.value()),
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: single_row,
                                onclick: move |_| draft.write().remove_date(index),
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| draft.write().add_date(),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        " Add Date"
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Creating..." } else { "Create Trail" }
                }
            }
        }
    }
}
