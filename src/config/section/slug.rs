//! URL slug configuration.

use serde::{Deserialize, Serialize};

/// Case transformation mode for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugCase {
    /// Convert to lowercase.
    Lower,
    /// Convert to UPPERCASE.
    Upper,
    /// Preserve original case (default). URLs are lower-cased when assembled.
    #[default]
    Preserve,
}

/// Separator character for slugs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SlugSeparator {
    /// Dash separator (`-`) (default).
    #[default]
    Dash,
    /// Underscore separator (`_`).
    Underscore,
}

impl SlugSeparator {
    /// Get the character representation.
    pub const fn as_char(&self) -> char {
        match self {
            Self::Dash => '-',
            Self::Underscore => '_',
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SlugConfig {
    /// Separator character for spaces and punctuation.
    pub separator: SlugSeparator,
    /// Case transformation.
    pub case: SlugCase,
}
