//! Input Field Components
//!
//! Labelled text inputs and textareas with an inline error line.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
}

/// Single-line text input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "contactEmail".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         label: "Email".to_string(),
///         input_type: "email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let input_class = field_class("input-field", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                span { class: "input-error", "{error}" }
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub label: Option<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Validation message shown under the field
    #[props(default)]
    pub error: Option<String>,
}

/// Multi-line text input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let textarea_class = field_class("input-field textarea", props.error.is_some());

    rsx! {
        div { class: "form-field",
            if let Some(label) = &props.label {
                label { class: "input-label", r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                class: "{textarea_class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                span { class: "input-error", "{error}" }
            }
        }
    }
}

fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} invalid", base)
    } else {
        base.to_string()
    }
}
