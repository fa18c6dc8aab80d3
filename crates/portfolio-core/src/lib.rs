//! Portfolio Showcase Core Library
//!
//! Data model and view state for a single-page portfolio: a biography
//! section, a project gallery with a spotlight panel, and a contact form.
//!
//! ## Overview
//!
//! The core owns everything that can be decided without a renderer:
//!
//! - **Loading**: reading the project and about-me JSON documents
//! - **Gallery**: filtering raw records and building display cards
//! - **Selection**: tracking the single active card
//! - **Spotlight**: the detailed view of the selected project
//! - **Navigation**: carousel scroll offsets per viewport layout
//! - **Contact**: form validation rules
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{load_projects, Gallery, Selection};
//!
//! let raw = load_projects("data/projects_data.json").await?;
//! let gallery = Gallery::from_raw(raw);
//! let mut selection = Selection::initial(&gallery);
//!
//! if let Some(view) = selection.select(&gallery, 1) {
//!     println!("{} -> {}", view.heading, view.link_href);
//! }
//! ```

pub mod assets;
pub mod contact;
pub mod error;
pub mod gallery;
pub mod loader;
pub mod navigation;
pub mod selection;
pub mod spotlight;
pub mod types;

// Re-exports
pub use contact::{ContactForm, FormError, FormField, MESSAGE_LIMIT};
pub use error::{LoadError, LoadResult};
pub use gallery::{Gallery, ProjectCard};
pub use loader::{load_about_me, load_projects, parse_about_me, parse_projects};
pub use navigation::{Direction, ScrollAxis, ScrollOffset};
pub use selection::Selection;
pub use spotlight::SpotlightView;
pub use types::*;
