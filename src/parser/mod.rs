//! DOCX parsing module.
//!
//! Reading is split in two steps: a [`BodySource`] yields primitive body
//! records, and the extraction adapter maps them into the document model.

mod adapter;
mod docx_parser;
mod options;
mod package;
mod records;

pub use adapter::{extract, HEADING_STYLE_PREFIX};
pub use docx_parser::DocxParser;
pub use options::{ErrorMode, ParseOptions};
pub use package::DocxPackage;
pub use records::{BodyRecords, BodySource, ParagraphRecord, RunRecord, TableRecord};

use crate::error::Result;
use crate::model::ParseResult;

/// Read a body from any source and build a [`ParseResult`].
pub fn parse_source<S: BodySource + ?Sized>(source: &mut S) -> Result<ParseResult> {
    let body = source.read_body()?;
    Ok(extract(body.as_ref()))
}
