//! Error types for the markdocx library.

use std::io;
use thiserror::Error;

/// Result type alias for markdocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting or reading back a document.
///
/// Unrecognized Markdown never produces an error: the translator drops or
/// defaults whatever it does not model.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The ZIP writer could not add an entry or finalize the archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// A generated part could not be encoded as UTF-8 bytes.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error parsing XML content of an existing package.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required package part is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// A styling configuration file could not be loaded.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encoding("invalid surrogate".to_string());
        assert_eq!(err.to_string(), "Encoding error: invalid surrogate");

        let err = Error::MissingComponent("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing component: word/document.xml");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Config(_)));
    }
}
