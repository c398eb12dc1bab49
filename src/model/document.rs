//! Document-level types.

use super::{Heading, Paragraph, Table};
use serde::{Deserialize, Serialize};

/// Raw text recorded when the package has no document body.
pub const EMPTY_BODY_TEXT: &str = "(Document body is empty)";

/// Extracted content of a DOCX document.
///
/// `headings` and `paragraphs` are filtered views of the same body stream,
/// each in document order. Their relative interleaving is not kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParseResult {
    /// Every non-blank paragraph text, newline-terminated, in document order
    pub raw_text: String,

    /// Heading paragraphs
    pub headings: Vec<Heading>,

    /// Body paragraphs (everything that is not a heading)
    pub paragraphs: Vec<Paragraph>,

    /// Top-level tables
    pub tables: Vec<Table>,
}

impl ParseResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Result for a package without a document body.
    pub fn empty_body() -> Self {
        Self {
            raw_text: EMPTY_BODY_TEXT.to_string(),
            ..Self::default()
        }
    }

    /// Add a heading.
    pub fn add_heading(&mut self, heading: Heading) {
        self.headings.push(heading);
    }

    /// Add a paragraph.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Add a table.
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Check if nothing structural was extracted.
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.paragraphs.is_empty() && self.tables.is_empty()
    }

    /// Check if this is the placeholder result for a package without a
    /// document body (see [`ParseResult::empty_body`]).
    ///
    /// A body holding only blank paragraphs is not a missing body.
    pub fn is_missing_body(&self) -> bool {
        self.is_empty() && self.raw_text == EMPTY_BODY_TEXT
    }

    /// Get the raw text without its trailing line breaks.
    pub fn plain_text(&self) -> &str {
        self.raw_text.trim_end()
    }
}
