//! Page components for Portfolio Showcase.

mod home;

pub use home::Home;
