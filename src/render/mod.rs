//! Rendering module for converting extracted documents to output formats.
//!
//! Every renderer is a pure function of a [`ParseResult`](crate::model::ParseResult):
//! the same input always yields the same output.

mod html;
mod json;
mod markdown;
mod stats;
mod text;

pub use html::{escape_html, to_html};
pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use stats::ExtractionStats;
pub use text::to_text;
