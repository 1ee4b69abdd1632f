//! Configuration to acknowledge reader preferences as well as set defaults.
//!
//! Specifically, we try to find a docfold.toml, and if present we load settings from there.
//! This provides wrapping width, preview length, the disclosure threshold and log level.

use crate::disclosure::{DisclosurePolicy, DEFAULT_ALWAYS_VISIBLE_DEPTH};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "docfold.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from docfold.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum line width for wrapping section bodies.
    pub wrap_width: usize,
    #[facet(default = 3)]
    /// Body lines shown for a collapsed section.
    pub preview_lines: usize,
    #[facet(default = 2)]
    /// Deepest heading level always shown in full.
    pub always_visible_depth: usize,
    #[facet(default = "warn".to_string())]
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            preview_lines: 3,
            always_visible_depth: DEFAULT_ALWAYS_VISIBLE_DEPTH,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from docfold.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    #[must_use]
    /// The disclosure rule these preferences describe.
    pub fn policy(&self) -> DisclosurePolicy {
        DisclosurePolicy {
            always_visible_depth: self.always_visible_depth,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
