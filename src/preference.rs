//! Theme variant and its string forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned by theme parsing and configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// A stored or supplied value is neither `"light"` nor `"dark"`.
    #[error("unrecognized theme value: {0:?}")]
    UnrecognizedValue(String),
    /// A configuration field failed validation.
    #[error("invalid theme config: {0}")]
    InvalidConfig(&'static str),
    /// The configuration document could not be parsed.
    #[error("failed to parse theme config: {0}")]
    Config(#[from] serde_json::Error),
}

/// Which of the two themes is in effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// String form used in the persistent store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Map a "prefers dark" answer onto a variant.
    #[must_use]
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ThemeError;

    /// Exact, case-sensitive match against the stored string forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnrecognizedValue(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "preference_test.rs"]
mod tests;
