//! UI Components for Portfolio Showcase.

mod about_me;
pub mod cards;
mod contact_form;
mod gallery_nav;

pub use about_me::AboutMeSection;
pub use contact_form::ContactForm;
pub use gallery_nav::GalleryNav;
