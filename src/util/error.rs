//! Error types for storey-levels.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for model reading and level extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// File does not exist or cannot be accessed
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Input is not a well-formed STEP physical file
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Two instances share the same `#id`
    #[error("Duplicate entity instance #{0}")]
    DuplicateEntity(u64),

    /// A building storey without a usable numeric elevation
    #[error("Malformed building storey #{id} (index {index}): {reason}")]
    MalformedElement { index: usize, id: u64, reason: String },

    /// Memory mapping failed
    #[error("Memory mapping failed: {0}")]
    MmapFailed(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a parse error at a 1-based line.
    pub fn parse(line: usize, msg: impl Into<String>) -> Self {
        Self::Parse { line, message: msg.into() }
    }

    /// True for errors raised while decoding the file contents.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::DuplicateEntity(_))
    }
}

/// Result type alias for storey-levels operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::parse(12, "expected ';'");
        assert!(e.to_string().contains("line 12"));
        assert!(e.is_parse_error());

        let e = Error::MalformedElement { index: 2, id: 41, reason: "elevation is $".into() };
        let msg = e.to_string();
        assert!(msg.contains("#41"));
        assert!(msg.contains("index 2"));
        assert!(!e.is_parse_error());
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
