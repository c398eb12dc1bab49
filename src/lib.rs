//! # undocx
//!
//! Word document (DOCX) content extraction library for Rust.
//!
//! This library reads the body of a DOCX package into a small structural
//! model (raw text, headings, paragraphs, tables) and renders that model
//! to HTML, JSON, Markdown, or plain text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("report.docx")?;
//!
//!     // Convert to Markdown
//!     let markdown = render::to_markdown(&doc);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: HTML, Markdown, JSON, plain text
//! - **Structure extraction**: Headings by style, emphasized paragraphs, tables
//! - **Deterministic rendering**: The same document always yields the same output
//! - **Lenient mode**: Keep partial content from damaged packages

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, DocxConverter,
    OutputFormat,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx};
pub use error::{Error, Result};
pub use model::{Heading, Paragraph, ParseResult, Table, EMPTY_BODY_TEXT};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{ExtractionStats, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return the extracted content.
///
/// # Arguments
///
/// * `path` - Path to the DOCX file
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("report.docx").unwrap();
/// println!("Headings: {}", doc.headings.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ParseResult> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient();
/// let doc = parse_file_with_options("damaged.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<ParseResult> {
    let parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("report.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<ParseResult> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<ParseResult> {
    let parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("report.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ParseResult> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a DOCX from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(
    reader: R,
    options: ParseOptions,
) -> Result<ParseResult> {
    let parser = DocxParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
///
/// # Example
///
/// ```no_run
/// use undocx::extract_text;
///
/// let text = extract_text("report.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_text(&doc))
}

/// Convert a DOCX file to a standalone HTML page.
///
/// # Example
///
/// ```no_run
/// use undocx::to_html;
///
/// let html = to_html("report.docx").unwrap();
/// std::fs::write("extract.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_html(&doc))
}

/// Convert a DOCX file to Markdown.
///
/// # Example
///
/// ```no_run
/// use undocx::to_markdown;
///
/// let markdown = to_markdown("report.docx").unwrap();
/// std::fs::write("extract.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_markdown(&doc))
}

/// Convert a DOCX file to JSON.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_json, JsonFormat};
///
/// let json = to_json("report.docx", JsonFormat::Pretty).unwrap();
/// std::fs::write("content.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let html = Undocx::new()
///     .lenient()
///     .parse("report.docx")?
///     .to_html();
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    parse_options: ParseOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Set the error handling mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.parse_options = self.parse_options.with_error_mode(mode);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let parser = DocxParser::open_with_options(path, self.parse_options)?;
        let result = parser.parse()?;
        Ok(UndocxResult { result })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let result = parser.parse()?;
        Ok(UndocxResult { result })
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The extracted content
    pub result: ParseResult,
}

impl UndocxResult {
    /// Convert to HTML.
    pub fn to_html(&self) -> String {
        render::to_html(&self.result)
    }

    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.result)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.result, format)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.result)
    }

    /// Collect extraction statistics.
    pub fn stats(&self) -> ExtractionStats {
        ExtractionStats::from_result(&self.result)
    }

    /// Get the extracted content.
    pub fn result(&self) -> &ParseResult {
        &self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undocx_builder() {
        let undocx = Undocx::new().lenient();
        assert_eq!(undocx.parse_options.error_mode, ErrorMode::Lenient);
    }

    #[test]
    fn test_undocx_builder_default() {
        let builder = Undocx::default();
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Strict);
    }

    #[test]
    fn test_undocx_builder_with_error_mode() {
        let builder = Undocx::new()
            .lenient()
            .with_error_mode(ErrorMode::Strict);
        assert_eq!(builder.parse_options.error_mode, ErrorMode::Strict);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = parse_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_too_short() {
        let result = parse_bytes(b"PK");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let data = [0xFF, 0xFE, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
        let result = parse_bytes(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bytes_truncated_zip() {
        // Valid magic, garbage afterwards
        let result = parse_bytes(b"PK\x03\x04garbage that is not an archive");
        assert!(matches!(result, Err(Error::UnreadablePackage(_))));
    }

    #[test]
    fn test_detect_format_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_undocx_builder_parse_invalid_bytes() {
        let result = Undocx::new().parse_bytes(b"not a docx");
        assert!(result.is_err());
    }

    // ==================== Output Format Tests ====================

    #[test]
    fn test_undocx_result_outputs() {
        let mut result = ParseResult::new();
        result.raw_text = "Title\nBody\n".to_string();
        result.add_heading(Heading::new(1, "Title"));
        result.add_paragraph(Paragraph::bold("Body"));
        let wrapped = UndocxResult { result };

        assert!(wrapped.to_html().contains("<h1>Title</h1>"));
        assert_eq!(wrapped.to_markdown(), "# Title\n\n**Body**");
        assert_eq!(wrapped.to_text(), "Title\nBody");
        assert!(wrapped
            .to_json(JsonFormat::Compact)
            .unwrap()
            .starts_with("{\"rawText\":\"Title\\nBody\\n\""));
        assert_eq!(wrapped.stats().heading_count, 1);
        assert_eq!(wrapped.result().paragraphs.len(), 1);
    }
}
