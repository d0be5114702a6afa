//! Trail list with filters.
//!
//! Every filter edit restarts the list resource. The resource waits out the
//! configured debounce first, so typing only fetches for the last keystroke.

use api::{Difficulty, TrailFilter};
use dioxus::prelude::*;
use ui::trails::load_trails;
use ui::{use_config, use_session, Debouncer, TrailCard};

/// Input handler writing one filter field by its form name.
fn set_field(mut filter: Signal<TrailFilter>, field: &'static str) -> impl FnMut(FormEvent) {
    move |evt| filter.write().set(field, evt.value())
}

#[component]
pub fn Trails() -> Element {
    let session = use_session();
    let delay = use_config().filter_debounce();
    let debouncer = use_hook(Debouncer::new);
    let mut filter = use_signal(TrailFilter::default);
    let mut attempt = use_signal(|| 0u32);

    let mut trails = use_resource(move || {
        let criteria = filter();
        let _ = attempt();
        let session = session.clone();
        let debouncer = debouncer.clone();
        async move {
            if !debouncer.settle(delay).await {
                return None;
            }
            Some(load_trails(session.api(), &criteria).await)
        }
    });

    let listing = trails.read().clone().flatten();
    let current = filter();

    rsx! {
        div {
            class: "trails-container",
            h1 { "Discover Hiking Trails" }

            form {
                class: "filters-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    trails.restart();
                },
                div {
                    class: "filters-row",
                    div {
                        class: "filter-group",
                        label { r#for: "searchTerm", "Search" }
                        input {
                            id: "searchTerm",
                            placeholder: "Search by name or description",
                            value: current.search_term.clone(),
                            oninput: set_field(filter, "searchTerm"),
                        }
                    }
                    div {
                        class: "filter-group",
                        label { r#for: "location", "Location" }
                        input {
                            id: "location",
                            placeholder: "Enter location",
                            value: current.location.clone(),
                            oninput: set_field(filter, "location"),
                        }
                    }
                }
                div {
                    class: "filters-row",
                    div {
                        class: "filter-group",
                        label { r#for: "difficulty", "Difficulty" }
                        select {
                            id: "difficulty",
                            value: current.difficulty.clone(),
                            onchange: set_field(filter, "difficulty"),
                            option { value: "", "All Difficulties" }
                            for (value, label) in Difficulty::ALL.iter().map(|d| (d.as_str(), d.label())) {
                                option { value: value, "{label}" }
                            }
                        }
                    }
                    div {
                        class: "filter-group",
                        label { r#for: "minLength", "Min Length (km)" }
                        input {
                            id: "minLength",
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            value: current.min_length.clone(),
                            oninput: set_field(filter, "minLength"),
                        }
                    }
                    div {
                        class: "filter-group",
                        label { r#for: "maxLength", "Max Length (km)" }
                        input {
                            id: "maxLength",
                            r#type: "number",
                            min: "0",
                            step: "0.1",
                            value: current.max_length.clone(),
                            oninput: set_field(filter, "maxLength"),
                        }
                    }
                }
                div {
                    class: "filters-buttons",
                    button { class: "btn btn-primary", r#type: "submit", "Apply Filters" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| filter.write().clear(),
                        "Clear Filters"
                    }
                }
            }

            match listing {
                None => rsx! { div { class: "loading", "Loading trails..." } },
                Some(Err(error)) => rsx! {
                    div {
                        class: "error-message",
                        p { "{error}" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| attempt += 1,
                            "Retry"
                        }
                    }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    div { class: "no-trails", "No trails found matching your criteria." }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        class: "trails-grid",
                        for trail in list {
                            TrailCard { key: "{trail.id}", trail: trail.clone() }
                        }
                    }
                },
            }
        }
    }
}
