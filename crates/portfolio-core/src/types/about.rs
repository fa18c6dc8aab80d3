//! About-me document and its display form.

use serde::{Deserialize, Serialize};

use crate::assets::{resolve_asset, HEADSHOT_PLACEHOLDER};
use crate::types::project::non_empty;

/// Shown when the document has no biography text
pub const BIO_FALLBACK: &str = "No biography available";

/// The about-me data document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutMe {
    /// Biography text
    #[serde(rename = "aboutMe", alias = "about_me")]
    pub about_me: Option<String>,
    /// Relative path of the headshot image
    pub headshot: Option<String>,
}

/// Resolved content of the about-me section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutMeView {
    pub bio: String,
    pub headshot: String,
}

impl AboutMeView {
    pub fn from_about(about: &AboutMe) -> Self {
        Self {
            bio: non_empty(&about.about_me).unwrap_or(BIO_FALLBACK).to_string(),
            headshot: resolve_asset(non_empty(&about.headshot), HEADSHOT_PLACEHOLDER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_key() {
        let about: AboutMe =
            serde_json::from_str(r#"{"aboutMe": "Hi", "headshot": "../images/me.webp"}"#).unwrap();
        let view = AboutMeView::from_about(&about);
        assert_eq!(view.bio, "Hi");
        assert_eq!(view.headshot, "./images/me.webp");
    }

    #[test]
    fn test_snake_case_alias() {
        let about: AboutMe = serde_json::from_str(r#"{"about_me": "Hello"}"#).unwrap();
        assert_eq!(about.about_me.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_fallbacks() {
        let view = AboutMeView::from_about(&AboutMe::default());
        assert_eq!(view.bio, BIO_FALLBACK);
        assert_eq!(view.headshot, HEADSHOT_PLACEHOLDER);
    }
}
