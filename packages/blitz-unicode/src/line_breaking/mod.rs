//! UAX #14 Unicode Line Breaking Algorithm Implementation
//!
//! The module is organized into focused submodules:
//! - `types`: Line breaking classes and the per-boundary result type
//! - `rule_application`: LB1 resolution and the LB4 to LB31 rule cascade
//! - `analyzer`: The forward scan driving the rules over a codepoint buffer

pub mod analyzer;
pub(crate) mod rule_application;
pub mod types;

pub use analyzer::LineBreakAlgorithm;
pub use types::{LineBreakClass, LineBreakType};
