//! Contact form validation.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Maximum message length in characters
pub const MESSAGE_LIMIT: usize = 300;

/// Form field an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Message,
}

/// A single validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Email address is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    EmailInvalid,

    #[error("Email contains illegal characters")]
    EmailIllegalCharacters,

    #[error("Message is required")]
    MessageRequired,

    #[error("Message contains illegal characters")]
    MessageIllegalCharacters,

    #[error("Message must be {limit} characters or fewer (currently {length})")]
    MessageTooLong { length: usize, limit: usize },
}

impl FormError {
    pub fn field(&self) -> FormField {
        match self {
            FormError::EmailRequired
            | FormError::EmailInvalid
            | FormError::EmailIllegalCharacters => FormField::Email,
            FormError::MessageRequired
            | FormError::MessageIllegalCharacters
            | FormError::MessageTooLong { .. } => FormField::Message,
        }
    }
}

fn email_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"))
}

fn email_illegal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-zA-Z0-9@._-]").expect("valid regex"))
}

fn message_illegal() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[<>{}\[\]\\^~|]").expect("valid regex"))
}

/// Contents of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            message: message.into(),
        }
    }

    /// Message length in characters, as shown by the live counter
    pub fn message_chars(&self) -> usize {
        self.message.chars().count()
    }

    pub fn is_over_limit(&self) -> bool {
        self.message_chars() > MESSAGE_LIMIT
    }

    /// Check every rule and collect all failures, email rules first.
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors = Vec::new();

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FormError::EmailRequired);
        } else {
            if email_illegal().is_match(email) {
                errors.push(FormError::EmailIllegalCharacters);
            }
            if !email_shape().is_match(email) {
                errors.push(FormError::EmailInvalid);
            }
        }

        if self.message.trim().is_empty() {
            errors.push(FormError::MessageRequired);
        } else {
            if message_illegal().is_match(&self.message) {
                errors.push(FormError::MessageIllegalCharacters);
            }
            if self.is_over_limit() {
                errors.push(FormError::MessageTooLong {
                    length: self.message_chars(),
                    limit: MESSAGE_LIMIT,
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
