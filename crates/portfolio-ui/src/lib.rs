//! Portfolio Showcase UI Components
//!
//! Dioxus primitives shared by the page sections: buttons for carousel
//! arrows and form submission, and labelled form fields.
//!
//! Styling lives in the application's global stylesheet; components here
//! only choose class names.

pub mod components;

pub use components::*;
