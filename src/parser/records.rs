//! Primitive body records produced by a package reader.
//!
//! These types are the boundary between container parsing and the
//! extraction adapter: they carry only the facts the adapter needs
//! (paragraph text, style id, run emphasis, table cell text).

use crate::error::Result;

/// Emphasis flags of a single run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunRecord {
    pub bold: bool,
    pub italic: bool,
}

impl RunRecord {
    /// A run without emphasis.
    pub fn plain() -> Self {
        Self::default()
    }

    /// A bold run.
    pub fn bold() -> Self {
        Self {
            bold: true,
            italic: false,
        }
    }

    /// An italic run.
    pub fn italic() -> Self {
        Self {
            bold: false,
            italic: true,
        }
    }
}

/// A body paragraph as read from the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphRecord {
    /// Flattened paragraph text
    pub text: String,

    /// Paragraph style id (e.g., "Heading2")
    pub style_id: Option<String>,

    /// Runs in paragraph order
    pub runs: Vec<RunRecord>,
}

impl ParagraphRecord {
    /// Create a paragraph record with text and no style or runs.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the style id and return self.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Append a run and return self.
    pub fn with_run(mut self, run: RunRecord) -> Self {
        self.runs.push(run);
        self
    }
}

/// A top-level table as read from the package.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRecord {
    /// Rows of flattened cell text
    pub rows: Vec<Vec<String>>,
}

impl TableRecord {
    /// Create a table record from rows of text values.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// Paragraphs and tables of a document body, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyRecords {
    pub paragraphs: Vec<ParagraphRecord>,
    pub tables: Vec<TableRecord>,
}

impl BodyRecords {
    /// Create empty body records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph and return self.
    pub fn with_paragraph(mut self, paragraph: ParagraphRecord) -> Self {
        self.paragraphs.push(paragraph);
        self
    }

    /// Append a table and return self.
    pub fn with_table(mut self, table: TableRecord) -> Self {
        self.tables.push(table);
        self
    }
}

/// Source of body records.
///
/// `Ok(None)` signals a package without a document body, which is a valid
/// (degenerate) document rather than an error.
pub trait BodySource {
    /// Read the document body.
    fn read_body(&mut self) -> Result<Option<BodyRecords>>;
}

impl BodySource for BodyRecords {
    fn read_body(&mut self) -> Result<Option<BodyRecords>> {
        Ok(Some(std::mem::take(self)))
    }
}

impl BodySource for Option<BodyRecords> {
    fn read_body(&mut self) -> Result<Option<BodyRecords>> {
        Ok(self.take())
    }
}
