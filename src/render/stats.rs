//! Extraction statistics.

use crate::model::ParseResult;
use serde::{Deserialize, Serialize};

/// Statistics about extracted content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of headings extracted
    pub heading_count: u32,

    /// Number of body paragraphs extracted
    pub paragraph_count: u32,

    /// Number of tables extracted
    pub table_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a parse result.
    ///
    /// Word and character counts cover the raw text, i.e. headings and
    /// paragraphs but not table cells.
    pub fn from_result(result: &ParseResult) -> Self {
        let mut stats = Self {
            heading_count: result.headings.len() as u32,
            paragraph_count: result.paragraphs.len() as u32,
            table_count: result.tables.len() as u32,
            ..Self::default()
        };
        if !result.is_empty() {
            stats.count_text(&result.raw_text);
        }
        stats
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}
