use dioxus::prelude::*;

use super::ModalOverlay;

/// Yes/no question in a modal. Dismissing the overlay counts as "no".
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: move |_| on_cancel.call(()),
            p { class: "modal-message", "{message}" }
            div {
                class: "modal-actions",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_cancel.call(()),
                    "No"
                }
                button {
                    class: "btn btn-danger",
                    onclick: move |_| on_confirm.call(()),
                    "Yes"
                }
            }
        }
    }
}
