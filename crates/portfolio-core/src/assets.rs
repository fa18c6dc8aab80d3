//! Image asset paths and placeholders.
//!
//! Data documents reference images relative to the data directory
//! (`../images/x.webp`); the page resolves them relative to itself.

/// Card background used when a project has no card image
pub const CARD_PLACEHOLDER: &str = "./images/card_placeholder_bg.webp";

/// Spotlight background used when a project has no spotlight image
pub const SPOTLIGHT_PLACEHOLDER: &str = "./images/spotlight_placeholder_bg.webp";

/// Headshot used when the about-me document has none
pub const HEADSHOT_PLACEHOLDER: &str = "./images/headshot_placeholder.webp";

/// Rewrite a leading `../` segment to `./`.
pub fn normalize_asset_path(path: &str) -> String {
    match path.strip_prefix("../") {
        Some(rest) => format!("./{}", rest),
        None => path.to_string(),
    }
}

/// Normalize `path`, or fall back to `placeholder` when it is absent.
pub fn resolve_asset(path: Option<&str>, placeholder: &str) -> String {
    path.map(normalize_asset_path)
        .unwrap_or_else(|| placeholder.to_string())
}

/// Inline style applying `url` as a background image
pub fn background_style(url: &str) -> String {
    format!("background-image: url('{}');", url)
}
