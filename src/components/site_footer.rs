//! Site Footer Component

use chrono::Datelike;
use dioxus::prelude::*;

use super::site_header::Logo;

/// Social profile links
const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("https://twitter.com", "Twitter"),
    ("https://instagram.com", "Instagram"),
    ("https://linkedin.com", "LinkedIn"),
];

/// Copyright line for `year`.
pub fn copyright(year: i32) -> String {
    format!("\u{00A9} {} Sketch Mentor. All rights reserved.", year)
}

#[component]
pub fn SiteFooter() -> Element {
    let notice = copyright(chrono::Local::now().year());

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-top",
                    Logo {}
                    p { class: "footer-tagline", "Learn Visualize Solve" }
                }
                div { class: "footer-bottom",
                    div { class: "footer-copyright", "{notice}" }
                    div { class: "footer-links",
                        a { href: "#", class: "footer-link", "Privacy Policy" }
                        a { href: "#", class: "footer-link", "Terms of Service" }
                        div { class: "footer-social",
                            for (href, label) in SOCIAL_LINKS {
                                a {
                                    key: "{label}",
                                    href: "{href}",
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    class: "footer-link",
                                    "{label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
