//! DOCX document parser.

use std::io::Read;
use std::path::Path;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::Result;
use crate::model::ParseResult;

use super::options::ParseOptions;
use super::package::DocxPackage;
use super::parse_source;

/// DOCX document parser.
///
/// Owns the opened package; [`DocxParser::parse`] consumes the parser, so the
/// archive is released as soon as extraction is done.
pub struct DocxParser {
    package: DocxPackage,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a zip container
        detect_format_from_path(path)?;

        log::debug!("opening {}", path.display());
        let data = std::fs::read(path)?;
        Self::from_vec(data, options)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;
        Self::from_vec(data.to_vec(), options)
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        detect_format_from_bytes(&data)?;
        Self::from_vec(data, options)
    }

    fn from_vec(data: Vec<u8>, options: ParseOptions) -> Result<Self> {
        let package = DocxPackage::from_vec(data, options.error_mode)?;
        Ok(Self { package, options })
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse the document body into a [`ParseResult`].
    pub fn parse(mut self) -> Result<ParseResult> {
        parse_source(&mut self.package)
    }
}
