//! Site Header Component
//!
//! Fixed bar with the logo, in-page anchors and a join button.

use dioxus::prelude::*;

use super::JoinButton;

/// In-page anchors, in display order
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#how-it-works", "How It Works"),
    ("#join", "Join Waitlist"),
];

/// Logo wordmark, shared with the footer
#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "logo",
            span { class: "logo-icon", "\u{270E}" }
            span { class: "logo-text",
                "Sketch"
                span { class: "accent", "Mentor" }
            }
        }
    }
}

#[component]
pub fn SiteHeader() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container header-inner",
                Logo {}
                nav { class: "header-nav",
                    for (href, label) in NAV_LINKS {
                        a { key: "{href}", href: "{href}", class: "nav-link", "{label}" }
                    }
                }
                JoinButton {}
            }
        }
    }
}
