//! Runner configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{read_to_string, RunnerError, RunnerResult};

/// Options shared by every suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Evaluate test cases on the rayon thread pool.
    pub parallel: bool,
    /// Number of failures kept per suite for the report.
    pub max_failures_to_log: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            max_failures_to_log: 20,
        }
    }
}

impl RunnerConfig {
    /// Read a JSON configuration file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> RunnerResult<Self> {
        let text = read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| RunnerError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}
