//! Heading and paragraph types.

use serde::{Deserialize, Serialize};

/// A heading paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Heading {
    /// Heading depth, normally 1-6. Not clamped.
    pub level: i32,

    /// Heading text
    pub text: String,
}

impl Heading {
    /// Create a heading.
    pub fn new(level: i32, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// A body paragraph with paragraph-wide emphasis.
///
/// Emphasis is aggregated over all runs: a single bold run makes the whole
/// paragraph bold.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,

    /// Any run is bold
    pub is_bold: bool,

    /// Any run is italic
    pub is_italic: bool,
}

impl Paragraph {
    /// Create a paragraph with explicit emphasis flags.
    pub fn new(text: impl Into<String>, is_bold: bool, is_italic: bool) -> Self {
        Self {
            text: text.into(),
            is_bold,
            is_italic,
        }
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self::new(text, false, false)
    }

    /// Create a bold paragraph.
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, true, false)
    }

    /// Create an italic paragraph.
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, false, true)
    }

    /// Check if the paragraph has any emphasis.
    pub fn is_emphasized(&self) -> bool {
        self.is_bold || self.is_italic
    }
}
