//! Script classification (UAX #24)
//!
//! - `types`: the `Script` enum and its alias tables
//! - `analyzer`: per-codepoint script assignment

pub mod analyzer;
pub mod types;

pub use analyzer::ScriptAnalyzer;
pub use types::Script;
