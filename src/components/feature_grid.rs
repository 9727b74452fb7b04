//! Feature Grid
//!
//! "Why Choose SketchMentor" section: six feature cards in a responsive grid.

use dioxus::prelude::*;

/// Icon, title and description of one feature card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    /// Accent class for the icon (orange, purple, teal)
    pub tone: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "\u{1F3AC}",
        tone: "orange",
        title: "AI-Generated Video Explanations",
        description: "Get automatically generated visual guides and animated walkthroughs tailored to your questions.",
    },
    Feature {
        icon: "\u{270D}",
        tone: "purple",
        title: "Real-Time Equation Solving",
        description: "Write math problems directly on our canvas and receive instant, step-by-step solutions.",
    },
    Feature {
        icon: "\u{1F4C8}",
        tone: "teal",
        title: "Interactive Graph Visualizer",
        description: "Watch equations transform into real-time, interactive graphs to deepen your understanding.",
    },
    Feature {
        icon: "\u{1F916}",
        tone: "purple",
        title: "Smart AI Chatbot (RAG-Based)",
        description: "Ask questions and receive context-aware answers drawn from video transcripts and math content.",
    },
    Feature {
        icon: "\u{1F3A4}",
        tone: "teal",
        title: "Audio-to-Text Transcription",
        description: "Turn spoken lectures and tutorials into searchable, readable content using Whisper AI.",
    },
    Feature {
        icon: "\u{1F522}",
        tone: "orange",
        title: "Step-by-Step Learning Journey",
        description: "Learn at your own pace with detailed, guided breakdowns of complex problems and concepts.",
    },
];

#[component]
pub fn FeatureCard(feature: Feature) -> Element {
    rsx! {
        article { class: "feature-card",
            div { class: "feature-icon {feature.tone}", "{feature.icon}" }
            h3 { class: "feature-title", "{feature.title}" }
            p { class: "feature-description", "{feature.description}" }
        }
    }
}

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        section { id: "features", class: "features-section",
            div { class: "container",
                h2 { class: "section-title",
                    "Why Choose "
                    span { class: "accent", "Sketch" }
                    " "
                    span { class: "accent-blue", "Mentor" }
                }
                p { class: "section-subtitle",
                    "Our platform offers powerful AI tools to help you truly understand math and become a more confident problem solver."
                }
                div { class: "feature-grid",
                    for feature in FEATURES {
                        FeatureCard { key: "{feature.title}", feature }
                    }
                }
            }
        }
    }
}
