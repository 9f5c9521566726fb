//! Theme configuration.
//!
//! DESIGN
//! ======
//! The defaults line up with the stylesheet build: dark-mode rules are
//! compiled against the `dark` class on `<html>`, and the stored choice lives
//! under the `dark` key. Hosts that ship a different stylesheet can override
//! any field from JSON.

use serde::{Deserialize, Serialize};

use crate::preference::ThemeError;

/// `localStorage` key holding the persisted choice.
pub const DEFAULT_STORAGE_KEY: &str = "dark";
/// Class toggled on the document root while dark mode is active.
pub const DEFAULT_MARKER_CLASS: &str = "dark";
/// Media query answering "does the system prefer dark?".
pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub marker_class: String,
    pub media_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            marker_class: DEFAULT_MARKER_CLASS.to_owned(),
            media_query: DEFAULT_MEDIA_QUERY.to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] for malformed JSON and
    /// [`ThemeError::InvalidConfig`] when a field fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the controller cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.is_empty() {
            return Err(ThemeError::InvalidConfig("storage_key must not be empty"));
        }
        if self.marker_class.is_empty() {
            return Err(ThemeError::InvalidConfig("marker_class must not be empty"));
        }
        if self.marker_class.chars().any(char::is_whitespace) {
            return Err(ThemeError::InvalidConfig("marker_class must be a single class name"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
