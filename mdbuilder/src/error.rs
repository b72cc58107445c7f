//! Error types for document accumulation and building

use std::io;
use thiserror::Error;

/// Category of a failure, independent of its message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A table row has a different number of cells than the header
    ColumnMismatch,
    /// A second table of contents was requested
    DuplicateToc,
    /// A depth or heading level outside 1..=6
    InvalidDepth,
    /// A minimum depth greater than the maximum depth
    InvalidRange,
    /// The sink rejected the rendered document
    WriteFailure,
}

/// Errors recorded while a document is being accumulated
///
/// These never interrupt a builder chain. They are kept on the builder and
/// surface through `error()` or `build()`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    /// A table row does not have as many cells as the header
    #[error(
        "number of columns in the record doesn't match the header (header has {expected}, row {row} has {found})"
    )]
    ColumnMismatch {
        /// Number of header cells
        expected: usize,
        /// Number of cells in the offending row
        found: usize,
        /// Zero based index of the offending row
        row: usize,
    },

    /// The document already has a table of contents
    #[error("table of contents has already been generated")]
    DuplicateToc,

    /// A depth argument is outside 1..=6
    #[error("invalid {name}: {depth} (must be between 1 and 6)")]
    InvalidDepth {
        /// Which argument was rejected
        name: &'static str,
        /// The rejected value
        depth: u8,
    },

    /// The minimum depth is greater than the maximum depth
    #[error("min_depth ({min}) cannot be greater than max_depth ({max})")]
    InvalidRange {
        /// Requested minimum depth
        min: u8,
        /// Requested maximum depth
        max: u8,
    },

    /// A later error recorded on top of an earlier one
    #[error("{error}: {previous}")]
    Chained {
        /// The most recent error
        error: Box<MarkdownError>,
        /// Everything recorded before it
        previous: Box<MarkdownError>,
    },
}

impl MarkdownError {
    /// Wrap `self` with a newer error, keeping both messages
    pub fn chain(self, newer: MarkdownError) -> MarkdownError {
        MarkdownError::Chained {
            error: Box::new(newer),
            previous: Box::new(self),
        }
    }

    /// Kind of the most recently recorded error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarkdownError::ColumnMismatch { .. } => ErrorKind::ColumnMismatch,
            MarkdownError::DuplicateToc => ErrorKind::DuplicateToc,
            MarkdownError::InvalidDepth { .. } => ErrorKind::InvalidDepth,
            MarkdownError::InvalidRange { .. } => ErrorKind::InvalidRange,
            MarkdownError::Chained { error, .. } => error.kind(),
        }
    }

    /// Kinds of every recorded error, newest first
    pub fn kinds(&self) -> Vec<ErrorKind> {
        match self {
            MarkdownError::Chained { error, previous } => {
                let mut kinds = error.kinds();
                kinds.extend(previous.kinds());
                kinds
            }
            other => vec![other.kind()],
        }
    }

    /// Check whether an error of `kind` was recorded anywhere in the chain
    pub fn contains(&self, kind: ErrorKind) -> bool {
        self.kinds().contains(&kind)
    }
}

/// Errors returned by `build()`
#[derive(Error, Debug)]
pub enum BuildError {
    /// The sink rejected the write
    #[error("failed to write markdown text: {source}{}", latent_suffix(.latent))]
    Write {
        /// The I/O failure reported by the sink
        #[source]
        source: io::Error,
        /// Accumulation error recorded before the write, if any
        latent: Option<MarkdownError>,
    },

    /// The write succeeded but an accumulation error had been recorded
    #[error(transparent)]
    Latent(#[from] MarkdownError),
}

impl BuildError {
    /// Kind of the failure; a write failure outranks any latent error
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::Write { .. } => ErrorKind::WriteFailure,
            BuildError::Latent(e) => e.kind(),
        }
    }

    /// The accumulation error carried by this failure, if any
    pub fn latent(&self) -> Option<&MarkdownError> {
        match self {
            BuildError::Write { latent, .. } => latent.as_ref(),
            BuildError::Latent(e) => Some(e),
        }
    }
}

fn latent_suffix(latent: &Option<MarkdownError>) -> String {
    match latent {
        Some(e) => format!(": {}", e),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_keeps_both_messages() {
        let first = MarkdownError::ColumnMismatch {
            expected: 2,
            found: 1,
            row: 0,
        };
        let chained = first.chain(MarkdownError::DuplicateToc);

        let message = chained.to_string();
        assert!(message.starts_with("table of contents has already been generated: "));
        assert!(message.contains("number of columns in the record doesn't match the header"));
    }

    #[test]
    fn test_kind_reports_newest() {
        let chained = MarkdownError::DuplicateToc.chain(MarkdownError::InvalidRange { min: 4, max: 2 });
        assert_eq!(chained.kind(), ErrorKind::InvalidRange);
        assert_eq!(
            chained.kinds(),
            vec![ErrorKind::InvalidRange, ErrorKind::DuplicateToc]
        );
        assert!(chained.contains(ErrorKind::DuplicateToc));
        assert!(!chained.contains(ErrorKind::ColumnMismatch));
    }

    #[test]
    fn test_invalid_depth_message() {
        let e = MarkdownError::InvalidDepth {
            name: "max_depth",
            depth: 7,
        };
        assert_eq!(e.to_string(), "invalid max_depth: 7 (must be between 1 and 6)");
    }

    #[test]
    fn test_write_error_includes_latent() {
        let e = BuildError::Write {
            source: io::Error::other("disk full"),
            latent: Some(MarkdownError::ColumnMismatch {
                expected: 2,
                found: 3,
                row: 1,
            }),
        };
        let message = e.to_string();
        assert!(message.starts_with("failed to write markdown text: disk full: "));
        assert!(message.contains("doesn't match the header"));
        assert_eq!(e.kind(), ErrorKind::WriteFailure);
        assert_eq!(e.latent().map(MarkdownError::kind), Some(ErrorKind::ColumnMismatch));
    }

    #[test]
    fn test_write_error_without_latent() {
        let e = BuildError::Write {
            source: io::Error::other("broken pipe"),
            latent: None,
        };
        assert_eq!(e.to_string(), "failed to write markdown text: broken pipe");
        assert!(e.latent().is_none());
    }
}
