//! How It Works Section
//!
//! Numbered steps from signing up to the first tutoring session.

use dioxus::prelude::*;

pub const STEPS: [(&str, &str); 3] = [
    (
        "Sign in and join",
        "Continue with Google and tell us a little about your math background.",
    ),
    (
        "Ask or sketch a problem",
        "Type, draw or speak your question on the canvas.",
    ),
    (
        "Learn step by step",
        "Follow guided solutions, videos and graphs until it clicks.",
    ),
];

#[component]
pub fn HowItWorks() -> Element {
    rsx! {
        section { id: "how-it-works", class: "how-section",
            div { class: "container",
                h2 { class: "section-title", "How It Works" }
                ol { class: "steps",
                    for (index, (title, text)) in STEPS.iter().enumerate() {
                        {
                            let number = index + 1;
                            rsx! {
                                li { key: "{number}", class: "step",
                                    span { class: "step-number", "{number}" }
                                    h3 { class: "step-title", "{title}" }
                                    p { class: "step-text", "{text}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
