//! Button Components
//!
//! - Primary: purple call-to-action
//! - Hero: larger call-to-action used in page sections
//! - Joined: green, non-interactive "Successfully Joined!" state
//! - Google: white provider sign-in button
//! - Ghost: subtle secondary action

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Hero,
    Joined,
    Google,
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Hero => "btn-hero",
            ButtonVariant::Joined => "btn-joined",
            ButtonVariant::Google => "btn-google",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub children: Element,
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    #[props(default = false)]
    pub disabled: bool,
    /// button, submit or reset
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Extra CSS classes appended to the variant class
    #[props(default)]
    pub class: Option<String>,
}

/// Join the variant class with optional extra classes.
pub fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|e| !e.is_empty()) {
        Some(extra) => format!("{} {}", variant.class(), extra),
        None => variant.class().to_string(),
    }
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Hero,
///         onclick: move |_| session.open_modal(),
///         "Join Waitlist"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Hero.class(), "btn-hero");
        assert_eq!(ButtonVariant::Joined.class(), "btn-joined");
        assert_eq!(ButtonVariant::Google.class(), "btn-google");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(button_class(ButtonVariant::Hero, Some("mx-auto")), "btn-hero mx-auto");
        assert_eq!(button_class(ButtonVariant::Hero, Some("")), "btn-hero");
        assert_eq!(button_class(ButtonVariant::Ghost, None), "btn-ghost");
    }
}
