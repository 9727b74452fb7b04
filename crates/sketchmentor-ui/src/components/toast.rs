//! Toast Components
//!
//! Stack of transient notifications pinned to the top centre of the page.
//! The caller owns the list and removes entries when they expire.

use dioxus::prelude::*;

/// Visual tone of a toast
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastTone {
    Success,
    Error,
}

impl ToastTone {
    pub fn class(&self) -> &'static str {
        match self {
            ToastTone::Success => "toast toast-success",
            ToastTone::Error => "toast toast-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastTone::Success => "\u{2713}",
            ToastTone::Error => "\u{2715}",
        }
    }
}

/// One visible toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastMessage {
    /// Monotonic id, used as the render key and for removal
    pub id: u64,
    pub tone: ToastTone,
    pub text: String,
}

#[component]
pub fn ToastStack(toasts: Vec<ToastMessage>, on_dismiss: EventHandler<u64>) -> Element {
    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for toast in toasts.iter() {
                {
                    let id = toast.id;
                    let class = toast.tone.class();
                    let icon = toast.tone.icon();
                    rsx! {
                        div {
                            key: "{id}",
                            class: "{class}",
                            onclick: move |_| on_dismiss.call(id),
                            span { class: "toast-icon", "{icon}" }
                            span { class: "toast-text", "{toast.text}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_tone_classes() {
        assert_eq!(ToastTone::Success.class(), "toast toast-success");
        assert_eq!(ToastTone::Error.class(), "toast toast-error");
        assert_ne!(ToastTone::Success.icon(), ToastTone::Error.icon());
    }
}
