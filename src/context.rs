//! Site configuration context for Portfolio Showcase.
//!
//! Provides the resolved configuration to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(get_site_config);
//!
//! // In child components
//! let config = use_site_config();
//! let projects = config.projects_path();
//! ```

use std::path::PathBuf;

use dioxus::prelude::*;

/// File name of the project list document
pub const PROJECTS_FILE: &str = "projects_data.json";

/// File name of the about-me document
pub const ABOUT_ME_FILE: &str = "aboutMeData.json";

/// Runtime configuration resolved from the command line
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Directory holding the data documents
    pub data_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl SiteConfig {
    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_FILE)
    }

    pub fn about_me_path(&self) -> PathBuf {
        self.data_dir.join(ABOUT_ME_FILE)
    }
}

/// Get the site configuration for the application.
/// Uses the global configuration set from command line args.
pub fn get_site_config() -> SiteConfig {
    crate::get_site_config()
}

/// Hook to access the site configuration from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
