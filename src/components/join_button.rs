//! Join Button
//!
//! Every call-to-action on the page. Opens the waitlist modal, or shows
//! "Successfully Joined!" and stays disabled once the visitor is on the list.

use dioxus::prelude::*;
use sketchmentor_ui::{Button, ButtonVariant};

use crate::context::{use_flow, use_waitlist};

#[derive(Props, Clone, PartialEq)]
pub struct JoinButtonProps {
    /// Large hero style instead of the compact header style
    #[props(default = false)]
    pub hero: bool,
    /// Extra classes, e.g. "centered"
    #[props(default)]
    pub class: String,
}

#[component]
pub fn JoinButton(props: JoinButtonProps) -> Element {
    let waitlist = use_waitlist();
    let flow = use_flow();

    let (joined, label) = {
        let snapshot = flow.read();
        (snapshot.is_joined(), snapshot.join_label())
    };

    let variant = match (joined, props.hero) {
        (true, _) => ButtonVariant::Joined,
        (false, true) => ButtonVariant::Hero,
        (false, false) => ButtonVariant::Primary,
    };
    let icon = if joined { "\u{2713}" } else { "\u{203A}" };

    rsx! {
        Button {
            variant,
            class: props.class.clone(),
            disabled: joined,
            onclick: move |_| waitlist.session.open_modal(),
            span { class: "btn-label", "{label}" }
            span { class: "btn-icon", "{icon}" }
        }
    }
}
