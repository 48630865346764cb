//! Runner errors. Test mismatches are results, not errors; these cover
//! the surrounding I/O and data loading.

use std::path::PathBuf;

use blitz_unicode::UnicodeDataError;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid runner configuration {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] UnicodeDataError),

    #[error("No property data given (pass --data or --ucd-dir)")]
    NoPropertyData,
}

pub type RunnerResult<T> = Result<T, RunnerError>;

pub(crate) fn read_to_string(path: impl Into<PathBuf>) -> RunnerResult<String> {
    let path = path.into();
    std::fs::read_to_string(&path).map_err(|source| RunnerError::Io { path, source })
}
