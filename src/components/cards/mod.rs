//! Project card system
//!
//! The gallery of project cards and the spotlight panel they drive.

mod card_gallery;
mod project_card;
mod spotlight_panel;

pub use card_gallery::{CardGallery, GALLERY_ID};
pub use project_card::ProjectCardView;
pub use spotlight_panel::SpotlightPanel;
