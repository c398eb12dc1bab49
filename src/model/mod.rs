//! Document model types for extracted DOCX content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! package extraction and content rendering. The model holds no formatting
//! decisions of any output target and is treated as write-once once the
//! extraction adapter has built it.

mod document;
mod paragraph;
mod table;

pub use document::{ParseResult, EMPTY_BODY_TEXT};
pub use paragraph::{Heading, Paragraph};
pub use table::Table;
