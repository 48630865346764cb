//! Grapheme cluster boundaries (UAX #29)

pub mod breaker;
pub mod types;

pub use breaker::GraphemeBreaker;
pub use types::GraphemeBreakClass;
