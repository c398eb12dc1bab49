//! Plain text rendering for extracted documents.

use crate::model::ParseResult;

/// Convert a document to plain text.
///
/// This is the raw text in document order (headings and paragraphs
/// interleaved as in the source), without trailing line breaks.
pub fn to_text(result: &ParseResult) -> String {
    result.plain_text().to_string()
}
