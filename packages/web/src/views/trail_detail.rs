//! Trail page with the booking form.

use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::booking::{submit_booking, BOOKING_SUCCESS};
use ui::icons::{FaClock, FaLocationDot, FaMountain, FaRulerHorizontal};
use ui::trails::load_trail_detail;
use ui::{
    date_label, format_price, trail_path, use_auth, use_session, BookingDraft, BookingOutcome,
    Icon,
};

use crate::Route;

#[derive(Debug, Clone, PartialEq)]
enum Feedback {
    Success(String),
    Error(String),
}

#[component]
pub fn TrailDetail(id: i64) -> Element {
    // Track the id in a signal so use_resource re-runs on route param change
    let mut trail_id = use_signal(|| id);
    if *trail_id.peek() != id {
        trail_id.set(id);
    }

    let auth = use_auth();
    let session = use_session();
    let nav = use_navigator();
    let mut draft = use_signal(BookingDraft::default);
    let mut dates = use_signal(Vec::<NaiveDate>::new);
    let mut feedback = use_signal(|| Option::<Feedback>::None);
    let mut submitting = use_signal(|| false);

    let loader = session.clone();
    let detail = use_resource(move || {
        let id = trail_id();
        let session = loader.clone();
        async move {
            let result = load_trail_detail(session.api(), id).await;
            if let Ok(loaded) = &result {
                dates.set(loaded.available_dates.clone());
            }
            draft.set(BookingDraft::default());
            feedback.set(None);
            result
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            let mut auth = auth;
            let id = *trail_id.peek();
            let current = draft();
            let available = dates();
            submitting.set(true);
            let outcome = submit_booking(&session, &mut auth, id, &current, &available).await;
            submitting.set(false);
            match outcome {
                BookingOutcome::LoginRequired { return_to } => {
                    nav.push(Route::login_then(return_to));
                }
                BookingOutcome::Booked {
                    available_dates, ..
                } => {
                    feedback.set(Some(Feedback::Success(BOOKING_SUCCESS.to_string())));
                    draft.write().reset();
                    if let Some(fresh) = available_dates {
                        dates.set(fresh);
                    }
                }
                BookingOutcome::Failed(error) => feedback.set(Some(Feedback::Error(error))),
            }
        });
    };

    let loaded = detail.read().clone();
    let trail = match loaded {
        None => return rsx! { div { class: "loading", "Loading trail details..." } },
        Some(Err(error)) => return rsx! { div { class: "error-message", "{error}" } },
        Some(Ok(loaded)) => loaded.trail,
    };

    let signed_in = auth().is_authenticated();
    let form = draft();
    let people = form.people();
    let selected = form.date.map(|d| d.to_string()).unwrap_or_default();
    let price = format_price(trail.price);
    let total = format_price(form.estimated_total(trail.price));
    let image = trail.image().to_string();
    let difficulty = trail.difficulty.label();
    let features: Vec<String> = trail.feature_list().into_iter().map(String::from).collect();
    let options: Vec<(String, String)> = dates()
        .into_iter()
        .map(|d| (d.to_string(), date_label(d)))
        .collect();

    rsx! {
        div {
            class: "trail-detail-container",
            div {
                class: "trail-detail-header",
                h1 { "{trail.name}" }
                div {
                    class: "trail-detail-meta",
                    span { Icon { icon: FaLocationDot, width: 14, height: 14 } " {trail.location}" }
                    span { Icon { icon: FaMountain, width: 14, height: 14 } " {difficulty}" }
                    span { Icon { icon: FaRulerHorizontal, width: 14, height: 14 } " {trail.length} km" }
                    span { Icon { icon: FaClock, width: 14, height: 14 } " {trail.duration} hours" }
                    span { "{price}" }
                }
            }

            div {
                class: "trail-detail-content",
                img { class: "trail-detail-image", src: "{image}", alt: "{trail.name}" }

                div {
                    class: "trail-detail-info",
                    h2 { "Description" }
                    p { "{trail.description}" }
                    h2 { "Features" }
                    ul {
                        for feature in features {
                            li { "{feature}" }
                        }
                    }
                }

                div {
                    class: "trail-booking-form",
                    h2 { "Book This Trail" }
                    match feedback() {
                        Some(Feedback::Success(message)) => rsx! { div { class: "success-message", "{message}" } },
                        Some(Feedback::Error(message)) => rsx! { div { class: "error-message", "{message}" } },
                        None => rsx! {},
                    }
                    if !signed_in {
                        div {
                            class: "login-prompt",
                            p { "You need to be logged in to book this trail." }
                            Link {
                                class: "btn btn-primary",
                                to: Route::login_then(trail_path(trail.id)),
                                "Login to Book"
                            }
                        }
                    } else {
                        form {
                            onsubmit: onsubmit,
                            div {
                                class: "form-group",
                                label { r#for: "bookingDate", "Select Date" }
                                select {
                                    id: "bookingDate",
                                    required: true,
                                    value: selected,
                                    onchange: move |evt| draft.write().select_date(&evt.value()),
                                    option { value: "", "Select a date" }
                                    for (value, label) in options {
                                        option { key: "{value}", value: value.clone(), "{label}" }
                                    }
                                }
                            }
                            div {
                                class: "form-group",
                                label { r#for: "numberOfPeople", "Number of People" }
                                div {
                                    class: "number-input",
                                    button {
                                        class: "number-btn",
                                        r#type: "button",
                                        onclick: move |_| draft.write().decrement(),
                                        "-"
                                    }
                                    input {
                                        id: "numberOfPeople",
                                        r#type: "number",
                                        min: "1",
                                        required: true,
                                        value: "{people}",
                                        oninput: move |evt| draft.write().set_people_input(&evt.value()),
                                    }
                                    button {
                                        class: "number-btn",
                                        r#type: "button",
                                        onclick: move |_| draft.write().increment(),
                                        "+"
                                    }
                                }
                            }
                            div {
                                class: "form-group total-price",
                                span { "Total Price:" }
                                span { "{total}" }
                            }
                            button {
                                class: "btn btn-primary booking-button",
                                r#type: "submit",
                                disabled: submitting(),
                                if submitting() { "Booking..." } else { "Book Now" }
                            }
                        }
                    }
                }
            }
        }
    }
}
