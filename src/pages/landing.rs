//! Landing page - the whole SketchMentor site.
//!
//! Sections top to bottom: header, hero, features, how it works, join
//! call-to-action, footer. The waitlist modal, account chooser and toasts
//! float above the page.

use dioxus::prelude::*;

use crate::components::{
    AccountChooser, FeatureGrid, Hero, HowItWorks, JoinSection, SiteFooter, SiteHeader, Toaster,
    WaitlistModal,
};

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    rsx! {
        div { class: "landing",
            SiteHeader {}
            main {
                Hero {}
                FeatureGrid {}
                HowItWorks {}
                JoinSection {}
            }
            SiteFooter {}
        }

        WaitlistModal {}
        AccountChooser {}
        Toaster {}
    }
}
