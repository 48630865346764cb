//! Error handling for Unicode data loading and algorithm preconditions

use std::path::PathBuf;

/// Failures while loading or building the packed property tables.
///
/// Loading is all-or-nothing: no provider exists unless every section decoded.
#[derive(Debug, thiserror::Error)]
pub enum UnicodeDataError {
    #[error("Not a Unicode property blob (bad magic {found:02X?})")]
    BadMagic { found: [u8; 4] },

    #[error("Unsupported property blob version {found} (supported: {supported})")]
    UnsupportedVersion { found: u16, supported: u16 },

    #[error("Corrupt property blob at byte {offset}: {reason}")]
    CorruptFormat { offset: usize, reason: String },

    #[error("{file}:{line}: {message}")]
    UcdParse {
        file: String,
        line: usize,
        message: String,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UnicodeDataError {
    pub(crate) fn corrupt(offset: usize, reason: impl Into<String>) -> Self {
        UnicodeDataError::CorruptFormat {
            offset,
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(file: &str, line: usize, message: impl Into<String>) -> Self {
        UnicodeDataError::UcdParse {
            file: file.to_string(),
            line,
            message: message.into(),
        }
    }
}

/// Result type for property data operations
pub type UnicodeDataResult<T> = Result<T, UnicodeDataError>;

/// Caller contract violations. These indicate a programming error at the call
/// site, never a problem with the text being processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionError {
    #[error("Output buffer has length {actual}, expected {expected}")]
    BufferLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid paragraph direction {0} (expected 0 = LTR, 1 = RTL, 2 = Auto)")]
    InvalidDirection(i32),

    #[error("Invalid line range: start {start}, end {end}, length {len}")]
    InvalidLineRange { start: usize, end: usize, len: usize },
}

impl PreconditionError {
    /// Check an output buffer against the length the algorithm will fill.
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), PreconditionError> {
        if expected == actual {
            Ok(())
        } else {
            Err(PreconditionError::BufferLengthMismatch { expected, actual })
        }
    }
}
