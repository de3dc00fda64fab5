//! Error taxonomy for the line writer.

use std::io;

/// Errors returned by [`LineWriter`](crate::LineWriter) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Construction was asked to maintain fewer than one line.
    #[error("line count must be at least 1, got {0}")]
    InvalidLineCount(usize),
    /// The default stdout sink is not an interactive terminal.
    #[error("standard output is not a terminal")]
    NotATerminal,
    /// A line index outside the maintained block was addressed.
    #[error("line {line} out of range (writer maintains {lines} lines)")]
    LineOutOfRange {
        /// The requested line index.
        line: usize,
        /// The number of maintained lines.
        lines: usize,
    },
    /// The underlying sink rejected a write or flush.
    #[error("sink write failed: {0}")]
    Io(#[from] io::Error),
    /// The writer was already closed.
    #[error("writer is closed")]
    Closed,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidLineCount(0).to_string(),
            "line count must be at least 1, got 0"
        );
        assert_eq!(
            Error::LineOutOfRange { line: 5, lines: 3 }.to_string(),
            "line 5 out of range (writer maintains 3 lines)"
        );
        assert_eq!(Error::Closed.to_string(), "writer is closed");
    }

    #[test]
    fn test_io_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
