//! Waitlist Modal
//!
//! The signup dialog. Shows an outcome view once the visitor is on the list,
//! otherwise the auth step or the details form depending on the flow step.

use dioxus::prelude::*;
use sketchmentor_core::{ExperienceLevel, FormStep, Outcome, SubmissionStatus, INTEREST_OPTIONS};
use sketchmentor_ui::{
    Button, ButtonVariant, CheckboxGroup, Input, ModalShell, Select, SelectOption, TextArea,
};

use crate::context::{use_flow, use_popup_open, use_waitlist};

/// Body text of an outcome view.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::AlreadyJoined => {
            "You have already joined the SketchMentor waitlist. We'll notify you when we launch!"
        }
        Outcome::Joined => {
            "Thanks for joining the SketchMentor waitlist. We'll notify you when we launch!"
        }
    }
}

/// Waitlist modal component.
#[component]
pub fn WaitlistModal() -> Element {
    let waitlist = use_waitlist();
    let flow = use_flow();

    let (show, outcome, step) = {
        let snapshot = flow.read();
        (snapshot.modal_open, snapshot.outcome(), snapshot.step)
    };

    let body = match (outcome, step) {
        (Some(outcome), _) => rsx! { OutcomeView { outcome } },
        (None, FormStep::Auth) => rsx! { AuthStep {} },
        (None, FormStep::Details) => rsx! { DetailsStep {} },
    };

    rsx! {
        ModalShell {
            show,
            on_close: move |_| waitlist.session.close_modal(),
            {body}
        }
    }
}

#[component]
fn OutcomeView(outcome: Outcome) -> Element {
    let message = outcome_message(outcome);

    rsx! {
        div { class: "outcome-view",
            div { class: "outcome-icon", "\u{2713}" }
            h2 { class: "modal-title", "You're on the list!" }
            p { class: "modal-text", "{message}" }
        }
    }
}

/// Sign-in step shown to visitors without an identity.
#[component]
fn AuthStep() -> Element {
    let waitlist = use_waitlist();
    let flow = use_flow();
    let popup_open = use_popup_open();

    let failed = flow.read().sign_in_failed;

    let sign_in = move |_| {
        let session = waitlist.session.clone();
        spawn(async move {
            session.sign_in().await;
        });
    };

    rsx! {
        div { class: "auth-step",
            div { class: "modal-logo", "\u{270E}" }
            h2 { class: "modal-title", "Join the Waitlist" }
            p { class: "modal-text",
                "Sign in with Google to get started. Be the first to know when SketchMentor launches!"
            }
            Button {
                variant: ButtonVariant::Google,
                class: "full-width".to_string(),
                disabled: popup_open(),
                onclick: sign_in,
                span { class: "google-mark", "G" }
                span { "Continue with Google" }
            }
            if failed {
                p { class: "form-error", "Sign-in failed. Please try again." }
            }
        }
    }
}

/// Details form shown after sign-in.
#[component]
fn DetailsStep() -> Element {
    let waitlist = use_waitlist();
    let flow = use_flow();

    let snapshot = flow();
    let draft = snapshot.draft.clone();
    let status = snapshot.status;
    let submitting = snapshot.is_submitting();
    let signed_in_email = snapshot
        .identity
        .as_ref()
        .and_then(|identity| identity.email().map(str::to_string));

    let level_options: Vec<SelectOption> = ExperienceLevel::ALL
        .iter()
        .map(|level| SelectOption::new(level.value(), level.label()))
        .collect();
    let interest_options: Vec<String> = INTEREST_OPTIONS.iter().map(|s| s.to_string()).collect();
    let level_value = draft
        .experience_level
        .map(|level| level.value().to_string())
        .unwrap_or_default();

    let session = waitlist.session.clone();
    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        spawn(async move {
            session.clear_error();
            session.submit().await;
        });
    };

    let s_first = waitlist.session.clone();
    let s_last = waitlist.session.clone();
    let s_email = waitlist.session.clone();
    let s_level = waitlist.session.clone();
    let s_interest = waitlist.session.clone();
    let s_expect = waitlist.session.clone();
    let s_out = waitlist.session.clone();

    let (submit_label, submit_class) = if submitting {
        ("Submitting...", "full-width busy")
    } else {
        ("Join Waitlist", "full-width")
    };

    rsx! {
        form { class: "details-form", onsubmit: on_submit,
            h2 { class: "modal-title", "Complete Your Profile" }

            div { class: "form-row",
                Input {
                    id: "firstName",
                    label: "First Name",
                    value: draft.first_name.clone(),
                    placeholder: "e.g., Alex".to_string(),
                    required: true,
                    oninput: move |value: String| s_first.edit_draft(move |d| d.first_name = value),
                }
                Input {
                    id: "lastName",
                    label: "Last Name",
                    value: draft.last_name.clone(),
                    placeholder: "e.g., Chen".to_string(),
                    required: true,
                    oninput: move |value: String| s_last.edit_draft(move |d| d.last_name = value),
                }
            }

            Input {
                id: "email",
                label: "Email",
                input_type: "email",
                value: draft.email.clone(),
                placeholder: "your.email@example.com".to_string(),
                required: true,
                readonly: signed_in_email.is_some(),
                oninput: move |value: String| s_email.edit_draft(move |d| d.email = value),
            }
            if let Some(email) = signed_in_email.clone() {
                p { class: "form-hint",
                    "Signed in as {email}. "
                    a {
                        class: "link",
                        href: "#",
                        onclick: move |evt| {
                            evt.prevent_default();
                            s_out.sign_out();
                        },
                        "Sign out"
                    }
                }
            }

            Select {
                id: "experienceLevel",
                label: "Experience Level",
                value: level_value,
                options: level_options,
                placeholder: "Select your experience level",
                required: true,
                onchange: move |value: String| {
                    let level = ExperienceLevel::from_value(&value);
                    s_level.edit_draft(move |d| d.experience_level = level);
                },
            }

            CheckboxGroup {
                id: "interests",
                label: "Areas of Interest (Select all that apply)",
                options: interest_options,
                selected: draft.interests.clone(),
                ontoggle: move |interest: String| s_interest.toggle_interest(&interest),
            }

            TextArea {
                id: "expectations",
                label: "What are you hoping to gain? (Optional)",
                value: draft.expectations.clone(),
                rows: 4,
                placeholder: "e.g., Help with calculus, exam prep, visual explanations...".to_string(),
                oninput: move |value: String| s_expect.edit_draft(move |d| d.expectations = value),
            }

            Button {
                variant: ButtonVariant::Primary,
                button_type: "submit",
                class: submit_class.to_string(),
                disabled: submitting,
                if submitting {
                    span { class: "spinner" }
                }
                span { "{submit_label}" }
            }

            if status == SubmissionStatus::Error {
                p { class: "form-error",
                    "Failed to submit. Please check your details and try again."
                }
            }
        }
    }
}
