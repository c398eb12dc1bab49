//! DOCX container detection.
//!
//! A DOCX file is an OPC package stored as a zip archive, so detection only
//! checks the zip signature; part-level validation happens while parsing.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Signature of a zip local file header.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Signature of the end-of-central-directory record of an empty archive.
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";

/// Check that a file starts with a zip signature.
///
/// # Returns
/// * `Ok(())` if the file looks like a zip container
/// * `Err(Error::UnknownFormat)` otherwise
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// detect_format_from_path("report.docx").unwrap();
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(ZIP_MAGIC.len());
    file.take(ZIP_MAGIC.len() as u64).read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Check that bytes start with a zip signature.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if is_docx_bytes(data) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if bytes could be a DOCX package.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    data.starts_with(ZIP_MAGIC) || data.starts_with(ZIP_EMPTY_MAGIC)
}

/// Check if a file could be a DOCX package.
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}
