//! Error types for undocx library.

use std::io;
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file is not a zip container and cannot be a DOCX package.
    #[error("Unknown file format: not a valid DOCX package")]
    UnknownFormat,

    /// The package container is corrupt or an entry cannot be read.
    #[error("Unreadable package: {0}")]
    UnreadablePackage(String),

    /// A package part contains malformed XML.
    #[error("Malformed XML in {part}: {message}")]
    MalformedXml {
        /// Package part name (e.g., "word/document.xml")
        part: String,
        /// Parser message
        message: String,
    },

    /// Error during rendering (HTML, Markdown, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build a malformed-XML error for the given part.
    pub fn malformed_xml(part: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Error::MalformedXml {
            part: part.into(),
            message: err.to_string(),
        }
    }
}

/// Packages are read from memory, so every zip failure, including read
/// errors surfaced as `ZipError::Io`, means the container itself is damaged.
impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::UnreadablePackage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(
            err.to_string(),
            "Unknown file format: not a valid DOCX package"
        );

        let err = Error::malformed_xml("word/document.xml", "unexpected end");
        assert_eq!(
            err.to_string(),
            "Malformed XML in word/document.xml: unexpected end"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::InvalidArchive("bad central directory").into();
        assert!(matches!(err, Error::UnreadablePackage(_)));

        let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated entry");
        let err: Error = zip::result::ZipError::Io(eof).into();
        assert!(matches!(err, Error::UnreadablePackage(_)));
    }
}
