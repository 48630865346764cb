//! Bidirectional text resolution (UAX #9)
//!
//! - `types`: Bidi_Class values, paragraph direction and the result type
//! - `processing`: the resolver phases and line reordering

pub mod processing;
pub mod types;

pub use processing::{invert_permutation, BidiEngine, BidiScratch};
pub use types::{BidiClass, BidiResult, Direction, MAX_DEPTH};
