//! Error types for the word-list pipeline.
//!
//! Extraction, range validation, rendering and output each fail with their own
//! variant so the caller can report which stage went wrong. Tokenization,
//! aggregation and ranking are pure and have no error cases.

/// Result type alias for word-list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a word list.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Source document is malformed or unreadable
    #[error("Cannot read source document: {0}")]
    Input(String),

    /// Page range lies outside the document or is reversed
    #[error("Invalid page range {start}..={end} for a document with {total} pages")]
    Range {
        /// Requested first page (0-based)
        start: usize,
        /// Requested last page (0-based)
        end: usize,
        /// Total pages in the document
        total: usize,
    },

    /// Document has no pages, so no range can be valid
    #[error("Document has no pages")]
    EmptyDocument,

    /// Page range expression could not be parsed
    #[error("Invalid page range format '{0}': use 'all', '7', '1-5' or '1,5'")]
    PageRangeSyntax(String),

    /// Text of a page could not be decoded
    #[error("Failed to decode text of page {page}: {reason}")]
    Format {
        /// Page index (0-based)
        page: usize,
        /// Reason for the decode failure
        reason: String,
    },

    /// Output artifact could not be written
    #[error("Cannot write output: {0}")]
    Output(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Name of the pipeline stage this error belongs to.
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Input(_) | Error::Format { .. } => "extraction",
            Error::Range { .. } | Error::EmptyDocument | Error::PageRangeSyntax(_) => "range",
            Error::Output(_) => "output",
            Error::Config(_) => "config",
            Error::Io(_) => "render",
        }
    }

    /// Whether the error comes from an invalid page selection.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Error::Range { .. } | Error::EmptyDocument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_message() {
        let err = Error::Range {
            start: 5,
            end: 2,
            total: 3,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("5..=2"));
        assert!(msg.contains("3 pages"));
        assert!(err.is_range_error());
        assert_eq!(err.stage(), "range");
    }

    #[test]
    fn test_format_error_message() {
        let err = Error::Format {
            page: 12,
            reason: "bad font encoding".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("page 12"));
        assert!(msg.contains("bad font encoding"));
        assert_eq!(err.stage(), "extraction");
    }

    #[test]
    fn test_syntax_error_is_not_range_error() {
        let err = Error::PageRangeSyntax("1-2-3".to_string());
        assert!(!err.is_range_error());
        assert!(format!("{}", err).contains("1-2-3"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert_eq!(err.stage(), "render");
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
