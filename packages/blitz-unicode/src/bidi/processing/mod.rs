//! BiDi resolution phases
//!
//! Split by rule group:
//! - `explicit`: P2/P3 and X1 to X8
//! - `run_sequences`: X9, X10 and isolating run sequences
//! - `weak`: W1 to W7
//! - `neutral`: N0 to N2
//! - `implicit`: I1, I2 and L1
//! - `reorder`: L2 and L4
//! - `core`: the engine driving them per paragraph

pub mod core;
mod explicit;
mod implicit;
mod neutral;
mod reorder;
mod run_sequences;
mod weak;

pub use self::core::{BidiEngine, BidiScratch};
pub use reorder::invert_permutation;
