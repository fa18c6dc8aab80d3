//! Button Components
//!
//! - Primary: form submission and main actions
//! - Ghost: subtle secondary actions
//! - Arrow: round carousel navigation buttons

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Main action button
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         button_type: "submit".to_string(),
///         "Send"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

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

/// Icon button for compact actions
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional element id
    #[props(default)]
    pub id: Option<String>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            id: props.id.clone(),
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

/// Carousel arrow direction
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArrowDirection {
    Left,
    Right,
}

impl ArrowDirection {
    pub fn glyph(&self) -> &'static str {
        match self {
            ArrowDirection::Left => "\u{2039}",
            ArrowDirection::Right => "\u{203A}",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ArrowDirection::Left => "arrow-btn arrow-left",
            ArrowDirection::Right => "arrow-btn arrow-right",
        }
    }
}

/// Round arrow button used by the project carousel
#[component]
pub fn ArrowButton(
    direction: ArrowDirection,
    onclick: EventHandler<()>,
    aria_label: String,
    #[props(default)] id: Option<String>,
) -> Element {
    rsx! {
        IconButton {
            onclick: onclick,
            aria_label: aria_label,
            id: id,
            class: direction.class().to_string(),
            "{direction.glyph()}"
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn arrow_classes() {
        assert_eq!(ArrowDirection::Left.class(), "arrow-btn arrow-left");
        assert_eq!(ArrowDirection::Right.class(), "arrow-btn arrow-right");
        assert_ne!(ArrowDirection::Left.glyph(), ArrowDirection::Right.glyph());
    }

    #[test]
    fn join_classes_skips_empty_extra() {
        assert_eq!(join_classes("icon-btn", None), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("")), "icon-btn");
        assert_eq!(join_classes("icon-btn", Some("wide")), "icon-btn wide");
    }
}
