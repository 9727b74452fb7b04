//! Account Chooser
//!
//! Stand-in for the Google sign-in popup. Shown while the identity provider
//! waits for a choice; "Continue" signs in with the typed account, "Cancel"
//! or Escape dismisses the popup and the sign-in reports cancelled.
//!
//! Rendered outside the waitlist modal so closing the modal leaves a pending
//! sign-in answerable.

use dioxus::prelude::*;
use sketchmentor_ui::{Button, ButtonVariant, Input};

use crate::context::{use_popup_open, use_waitlist};

#[component]
pub fn AccountChooser() -> Element {
    let waitlist = use_waitlist();
    let popup_open = use_popup_open();
    let mut account = use_signal(String::new);

    if !popup_open() {
        return rsx! {};
    }

    let provider = waitlist.provider.clone();
    let mut choose = move || {
        let email = account().trim().to_string();
        if provider.choose_account(email) {
            account.set(String::new());
        }
    };

    let provider = waitlist.provider.clone();
    let dismiss = move || {
        if provider.dismiss() {
            tracing::debug!("Account chooser dismissed");
        }
    };
    let dismiss_key = dismiss.clone();
    let dismiss_click = dismiss;

    rsx! {
        div {
            class: "popup-overlay",
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    dismiss_key();
                }
            },

            form {
                class: "popup-window",
                role: "dialog",
                "aria-label": "Choose an account",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    choose();
                },

                div { class: "popup-header",
                    span { class: "google-mark", "G" }
                    span { "Sign in with Google" }
                }
                h3 { class: "popup-title", "Choose an account" }
                p { class: "popup-text", "to continue to SketchMentor" }

                Input {
                    id: "accountEmail",
                    label: "Email",
                    input_type: "email",
                    value: account(),
                    placeholder: "you@example.com".to_string(),
                    required: true,
                    oninput: move |value: String| account.set(value),
                }

                div { class: "popup-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| dismiss_click(),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit",
                        "Continue"
                    }
                }
            }
        }
    }
}
