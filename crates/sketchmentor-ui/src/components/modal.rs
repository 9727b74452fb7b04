//! Modal Shell Component
//!
//! Dimmed overlay with a centered panel. Clicking the overlay or the close
//! button calls `on_close`; clicks inside the panel do not propagate.

use dioxus::prelude::*;

use super::button::CloseButton;

#[component]
pub fn ModalShell(
    /// Whether the modal is visible
    show: bool,
    /// Called when the overlay, close button or Escape dismisses the modal
    on_close: EventHandler<()>,
    /// Extra class for the panel
    #[props(default)]
    class: Option<String>,
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    let panel_class = match class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("modal-content {}", extra),
        _ => "modal-content".to_string(),
    };

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    on_close.call(());
                }
            },

            div {
                class: "{panel_class}",
                role: "dialog",
                "aria-modal": "true",
                onclick: move |evt| evt.stop_propagation(),

                div { class: "modal-close",
                    CloseButton { onclick: move |_| on_close.call(()) }
                }
                {children}
            }
        }
    }
}
