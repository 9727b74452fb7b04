//! Toaster
//!
//! Top-centre toast stack fed by session notices. Toasts expire on their
//! own after a few seconds; clicking one removes it early.

use dioxus::prelude::*;
use sketchmentor_ui::ToastStack;

use crate::context::use_toasts;

#[component]
pub fn Toaster() -> Element {
    let mut toasts = use_toasts();

    rsx! {
        ToastStack {
            toasts: toasts(),
            on_dismiss: move |id: u64| toasts.write().retain(|t| t.id != id),
        }
    }
}
