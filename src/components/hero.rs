//! Hero Section

use dioxus::prelude::*;

use super::JoinButton;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container hero-inner",
                h1 { class: "hero-title",
                    "Empower Your Math Journey With"
                    br {}
                    span { class: "accent", "Real-Time AI Assistance" }
                }
                p { class: "hero-subtitle",
                    "Get instant feedback, explore step-by-step solutions, and understand complex math topics with personalized AI tutoring."
                }
                div { class: "hero-actions",
                    JoinButton { hero: true }
                }
                div { class: "hero-social-proof",
                    span { class: "social-proof-icon", "\u{1F465}" }
                    span { "200+ designers already on the waitlist" }
                }
            }
        }
    }
}
