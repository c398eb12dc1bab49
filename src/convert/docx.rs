//! DOCX document converter implementation.

use crate::error::Result;
use crate::model::ParseResult;
use crate::parser::DocxParser;
use crate::render::{to_html, to_json, to_markdown, to_text, ExtractionStats};
use std::path::Path;

use super::{ConvertOptions, ConvertResult, DocumentConverter, OutputFormat};

/// DOCX document converter.
///
/// Converts Word documents to HTML, Markdown, JSON, or plain text.
#[derive(Debug, Clone, Default)]
pub struct DocxConverter {
    _private: (),
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    fn convert_document(&self, doc: ParseResult, options: &ConvertOptions) -> Result<ConvertResult> {
        let format = options.output_format;
        let content = match format {
            OutputFormat::Markdown => to_markdown(&doc),
            OutputFormat::Html => to_html(&doc),
            OutputFormat::Json => to_json(&doc, options.json_format)?,
            OutputFormat::Text => to_text(&doc),
        };

        let mut result = ConvertResult::new(content).with_mime_type(format.mime_type());
        if options.collect_stats {
            result = result.with_stats(ExtractionStats::from_result(&doc));
        }
        Ok(result)
    }
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx", "docm"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = DocxParser::open_with_options(path, options.parse.clone())?;
        let doc = parser.parse()?;
        self.convert_document(doc, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let parser = DocxParser::from_bytes_with_options(bytes, options.parse.clone())?;
        let doc = parser.parse()?;
        self.convert_document(doc, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_docx_converter_extensions() {
        let converter = DocxConverter::new();
        assert_eq!(converter.supported_extensions(), &["docx", "docm"]);
        assert!(converter.supports_extension("docx"));
        assert!(converter.supports_extension("DOCX"));
        assert!(!converter.supports_extension("pdf"));
    }

    #[test]
    fn test_docx_converter_name() {
        let converter = DocxConverter::new();
        assert_eq!(converter.name(), "docx");
    }

    #[test]
    fn test_convert_bytes_rejects_non_zip() {
        let converter = DocxConverter::new();
        let result = converter.convert_bytes(b"not a docx", &ConvertOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }
}
