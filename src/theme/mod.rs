//! Theme for Portfolio Showcase.

mod styles;

pub use styles::GLOBAL_STYLES;
