//! Extraction adapter: body records to the document model.
//!
//! Applies heading detection (style ids starting with `Heading`) and
//! paragraph-level emphasis aggregation.

use crate::model::{Heading, Paragraph, ParseResult, Table};

use super::records::{BodyRecords, ParagraphRecord};

/// Style id prefix marking heading paragraphs.
pub const HEADING_STYLE_PREFIX: &str = "Heading";

/// Build a [`ParseResult`] from body records.
///
/// `None` means the package had no document body and yields
/// [`ParseResult::empty_body`].
pub fn extract(body: Option<&BodyRecords>) -> ParseResult {
    let Some(body) = body else {
        log::debug!("no document body, returning empty result");
        return ParseResult::empty_body();
    };

    let mut result = ParseResult::new();

    for record in &body.paragraphs {
        if record.text.trim().is_empty() {
            continue;
        }

        result.raw_text.push_str(&record.text);
        result.raw_text.push('\n');

        match heading_level(record) {
            Some(level) => {
                log::trace!("heading level {}: {:?}", level, record.text);
                result.add_heading(Heading::new(level, record.text.clone()));
            }
            None => result.add_paragraph(paragraph(record)),
        }
    }

    for record in &body.tables {
        result.add_table(Table {
            rows: record.rows.clone(),
        });
    }

    log::debug!(
        "extracted {} headings, {} paragraphs, {} tables",
        result.headings.len(),
        result.paragraphs.len(),
        result.tables.len()
    );

    result
}

/// Heading level of a paragraph, or `None` for body paragraphs.
///
/// An unparsable or missing level suffix defaults to 1.
fn heading_level(record: &ParagraphRecord) -> Option<i32> {
    let suffix = record
        .style_id
        .as_deref()?
        .strip_prefix(HEADING_STYLE_PREFIX)?;
    Some(suffix.trim().parse().unwrap_or(1))
}

fn paragraph(record: &ParagraphRecord) -> Paragraph {
    Paragraph {
        text: record.text.clone(),
        is_bold: record.runs.iter().any(|run| run.bold),
        is_italic: record.runs.iter().any(|run| run.italic),
    }
}
