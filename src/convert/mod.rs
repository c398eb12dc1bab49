//! Document converter module providing a plugin architecture for multiple formats.
//!
//! This module defines a flexible converter system that allows registering
//! converters for different file formats and dispatching conversions based
//! on file extensions.
//!
//! # Example
//!
//! ```no_run
//! use undocx::convert::{ConverterRegistry, ConvertOptions, DocxConverter, OutputFormat};
//! use std::sync::Arc;
//! use std::path::Path;
//!
//! fn main() -> undocx::Result<()> {
//!     let mut registry = ConverterRegistry::new();
//!     registry.register(Arc::new(DocxConverter::new()));
//!
//!     let options = ConvertOptions::new().with_format(OutputFormat::Html);
//!     let result = registry.convert(Path::new("report.docx"), &options)?;
//!     println!("{}", result.content);
//!     Ok(())
//! }
//! ```

mod docx;

pub use docx::DocxConverter;

use crate::error::{Error, Result};
use crate::parser::ParseOptions;
use crate::render::{ExtractionStats, JsonFormat};
use std::path::Path;
use std::sync::Arc;

/// Options for document conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Parsing options
    pub parse: ParseOptions,

    /// Output format
    pub output_format: OutputFormat,

    /// JSON layout when the output format is JSON
    pub json_format: JsonFormat,

    /// Whether to collect statistics during conversion
    pub collect_stats: bool,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set parsing options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Enable statistics collection.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

/// Output format for conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown format
    #[default]
    Markdown,

    /// Standalone HTML page
    Html,

    /// JSON structure
    Json,

    /// Plain text
    Text,
}

impl OutputFormat {
    /// MIME type of the format.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "text/markdown",
            OutputFormat::Html => "text/html",
            OutputFormat::Json => "application/json",
            OutputFormat::Text => "text/plain",
        }
    }

    /// Conventional file extension of the format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }
}

/// Result of document conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Converted content
    pub content: String,

    /// Extraction statistics (if collected)
    pub stats: Option<ExtractionStats>,

    /// MIME type of the output
    pub mime_type: &'static str,
}

impl ConvertResult {
    /// Create a new conversion result.
    pub fn new(content: String) -> Self {
        Self {
            content,
            stats: None,
            mime_type: OutputFormat::default().mime_type(),
        }
    }

    /// Set extraction statistics.
    pub fn with_stats(mut self, stats: ExtractionStats) -> Self {
        self.stats = Some(stats);
        self
    }

    /// Set MIME type.
    pub fn with_mime_type(mut self, mime_type: &'static str) -> Self {
        self.mime_type = mime_type;
        self
    }

    /// Get content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Trait for document converters.
///
/// Implement this trait to add support for a new document format.
pub trait DocumentConverter: Send + Sync {
    /// Get the supported file extensions for this converter.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["docx"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert a file at the given path.
    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult>;

    /// Convert from bytes.
    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult>;

    /// Check if this converter supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for document converters.
///
/// Converters are kept in registration order. Lookups scan newest first, so
/// a converter registered later shadows earlier ones for the extensions and
/// names they share.
#[derive(Default)]
pub struct ConverterRegistry {
    converters: Vec<Arc<dyn DocumentConverter>>,
}

impl ConverterRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the DOCX converter.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(DocxConverter::new()));
        registry
    }

    /// Register a converter.
    pub fn register(&mut self, converter: Arc<dyn DocumentConverter>) {
        log::debug!(
            "registered converter {} for {:?}",
            converter.name(),
            converter.supported_extensions()
        );
        self.converters.push(converter);
    }

    /// Get a converter by file extension (case-insensitive).
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters
            .iter()
            .rev()
            .find(|c| c.supports_extension(ext))
            .cloned()
    }

    /// Get a converter by name (case-insensitive).
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn DocumentConverter>> {
        self.converters
            .iter()
            .rev()
            .find(|c| c.name().eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    /// All supported extensions, sorted and deduplicated.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut extensions: Vec<&str> = self
            .converters
            .iter()
            .flat_map(|c| c.supported_extensions().iter().copied())
            .collect();
        extensions.sort_unstable();
        extensions.dedup();
        extensions
    }

    /// Pick the converter for a path from its extension.
    pub fn resolve(&self, path: &Path) -> Result<Arc<dyn DocumentConverter>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::Other(format!("{}: file has no extension", path.display())))?;

        self.get_by_extension(ext).ok_or_else(|| {
            Error::Other(format!(
                "no converter for .{} (supported: {})",
                ext,
                self.supported_extensions().join(", ")
            ))
        })
    }

    /// Convert a file using the converter for its extension.
    pub fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        self.resolve(path)?.convert(path, options)
    }

    /// Convert bytes using the converter registered for `ext`.
    pub fn convert_bytes(
        &self,
        bytes: &[u8],
        ext: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let converter = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::Other(format!("no converter for .{}", ext)))?;

        converter.convert_bytes(bytes, options)
    }
}
