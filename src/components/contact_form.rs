//! Contact Form Component
//!
//! Email + message form with inline validation and a live character
//! counter. Nothing is sent anywhere; a valid submission clears the form
//! and shows a confirmation.

use dioxus::prelude::*;
use portfolio_core::{ContactForm as ContactFormData, FormError, FormField, MESSAGE_LIMIT};
use portfolio_ui::{Button, ButtonVariant, Input, TextArea};

/// First error message for `field`, if any
fn field_error(errors: &[FormError], field: FormField) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(|e| e.to_string())
}

/// Whether the Clear button has nothing to reset
fn nothing_to_clear(form: &ContactFormData, errors: &[FormError], sent: bool) -> bool {
    form.email.is_empty() && form.message.is_empty() && errors.is_empty() && !sent
}

fn counter_class(over_limit: bool) -> &'static str {
    if over_limit {
        "char-counter over-limit"
    } else {
        "char-counter"
    }
}

#[component]
pub fn ContactForm() -> Element {
    let mut form = use_signal(ContactFormData::default);
    let mut errors = use_signal(Vec::<FormError>::new);
    let mut sent = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let result = form.read().validate();
        match result {
            Ok(()) => {
                tracing::info!("Contact form submitted");
                form.set(ContactFormData::default());
                errors.set(Vec::new());
                sent.set(true);
            }
            Err(found) => {
                tracing::debug!("Contact form rejected with {} errors", found.len());
                errors.set(found);
                sent.set(false);
            }
        }
    };

    let handle_clear = move |_: ()| {
        tracing::debug!("Contact form cleared");
        form.set(ContactFormData::default());
        errors.set(Vec::new());
        sent.set(false);
    };

    let clear_disabled = nothing_to_clear(&form.read(), &errors.read(), sent());
    let email_error = field_error(&errors.read(), FormField::Email);
    let message_error = field_error(&errors.read(), FormField::Message);
    let chars = form.read().message_chars();
    let over_limit = form.read().is_over_limit();

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-header", "Contact" }
            form { id: "formSection", class: "contact-form", onsubmit: handle_submit,
                Input {
                    id: "contactEmail".to_string(),
                    value: form.read().email.clone(),
                    oninput: move |value: String| {
                        form.write().email = value;
                        sent.set(false);
                    },
                    label: "Email".to_string(),
                    input_type: "email".to_string(),
                    placeholder: "you@example.com".to_string(),
                    error: email_error,
                }
                TextArea {
                    id: "contactMessage".to_string(),
                    value: form.read().message.clone(),
                    oninput: move |value: String| {
                        form.write().message = value;
                        sent.set(false);
                    },
                    label: "Message".to_string(),
                    placeholder: "Say hello...".to_string(),
                    error: message_error,
                }
                span { id: "charactersLeft", class: counter_class(over_limit),
                    "Characters: {chars}/{MESSAGE_LIMIT}"
                }
                div { class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: handle_clear,
                        disabled: clear_disabled,
                        "Clear"
                    }
                }
                if sent() {
                    p { class: "form-confirmation", "Thanks! Your message passed validation." }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_picks_first_for_field() {
        let errors = vec![
            FormError::EmailIllegalCharacters,
            FormError::EmailInvalid,
            FormError::MessageRequired,
        ];
        assert_eq!(
            field_error(&errors, FormField::Email).as_deref(),
            Some("Email contains illegal characters")
        );
        assert_eq!(
            field_error(&errors, FormField::Message).as_deref(),
            Some("Message is required")
        );
        assert_eq!(field_error(&[], FormField::Email), None);
    }

    #[test]
    fn test_nothing_to_clear() {
        let empty = ContactFormData::default();
        assert!(nothing_to_clear(&empty, &[], false));
        assert!(!nothing_to_clear(&empty, &[], true));
        assert!(!nothing_to_clear(&empty, &[FormError::EmailRequired], false));

        let typed = ContactFormData {
            email: "a@b.co".to_string(),
            ..ContactFormData::default()
        };
        assert!(!nothing_to_clear(&typed, &[], false));
    }

    #[test]
    fn test_counter_class() {
        assert_eq!(counter_class(false), "char-counter");
        assert_eq!(counter_class(true), "char-counter over-limit");
    }
}
