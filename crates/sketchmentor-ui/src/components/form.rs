//! Form Field Components
//!
//! Labelled inputs for the waitlist details step: text input, textarea,
//! select and checkbox group. Every field takes an explicit `id` so labels
//! stay associated across re-renders.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// text, email, ...
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub readonly: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled single-line input
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = if props.readonly {
        "input-field readonly"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}",
                "{props.label}"
                if props.required {
                    span { class: "input-required", " *" }
                }
            }
            input {
                id: "{props.id}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                readonly: props.readonly,
                disabled: props.disabled,
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub id: String,
    pub label: String,
    pub value: String,
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    #[props(default = 3)]
    pub rows: u32,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            textarea {
                id: "{props.id}",
                class: "input-field textarea",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// One `<option>` of a [`Select`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Properties for the Select component
#[derive(Clone, PartialEq, Props)]
pub struct SelectProps {
    pub id: String,
    pub label: String,
    /// Currently selected value ("" for none)
    pub value: String,
    pub options: Vec<SelectOption>,
    pub onchange: EventHandler<String>,
    /// Label of the empty first option
    #[props(default = "Select...".to_string())]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
}

/// Labelled dropdown with an empty placeholder option
#[component]
pub fn Select(props: SelectProps) -> Element {
    rsx! {
        div { class: "form-field",
            label { class: "input-label", r#for: "{props.id}", "{props.label}" }
            select {
                id: "{props.id}",
                class: "input-field select",
                required: props.required,
                disabled: props.disabled,
                onchange: move |e| props.onchange.call(e.value()),
                option { value: "", selected: props.value.is_empty(), "{props.placeholder}" }
                for opt in props.options.iter() {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        selected: opt.value == props.value,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}

/// Properties for the CheckboxGroup component
#[derive(Clone, PartialEq, Props)]
pub struct CheckboxGroupProps {
    pub id: String,
    pub label: String,
    pub options: Vec<String>,
    pub selected: Vec<String>,
    /// Called with the option that was toggled
    pub ontoggle: EventHandler<String>,
    #[props(default = false)]
    pub disabled: bool,
}

/// Two-column grid of checkboxes
#[component]
pub fn CheckboxGroup(props: CheckboxGroupProps) -> Element {
    rsx! {
        fieldset { class: "form-field checkbox-group", id: "{props.id}",
            legend { class: "input-label", "{props.label}" }
            div { class: "checkbox-grid",
                for (index, opt) in props.options.iter().enumerate() {
                    {
                        let checked = props.selected.contains(opt);
                        let toggled = opt.clone();
                        let box_id = checkbox_id(&props.id, index);
                        rsx! {
                            label { key: "{box_id}", class: "checkbox-item", r#for: "{box_id}",
                                input {
                                    id: "{box_id}",
                                    r#type: "checkbox",
                                    checked: checked,
                                    disabled: props.disabled,
                                    onchange: move |_| props.ontoggle.call(toggled.clone()),
                                }
                                span { "{opt}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Element id of the `index`th checkbox in group `group_id`.
pub fn checkbox_id(group_id: &str, index: usize) -> String {
    format!("{}-{}", group_id, index)
}
