//! Join Section
//!
//! Closing call-to-action above the footer.

use dioxus::prelude::*;

use super::JoinButton;

#[component]
pub fn JoinSection() -> Element {
    rsx! {
        section { id: "join", class: "join-section",
            div { class: "container narrow",
                h2 { class: "section-title", "Ready to Elevate Your Design Career?" }
                p { class: "section-subtitle",
                    "Join the SketchMentor waitlist today and be the first to access personalized mentorship."
                }
                JoinButton { hero: true, class: "centered".to_string() }
            }
        }
    }
}
