//! Unicode property data and text segmentation for Blitz
//!
//! This crate provides the Unicode algorithms layer used by text layout:
//! - A packed, versioned property table (`UnicodeDataProvider`)
//! - Script classification (UAX #24)
//! - Grapheme cluster boundaries (UAX #29)
//! - Line break opportunities (UAX #14)
//! - Bidirectional embedding levels and reordering (UAX #9)
//!
//! All algorithms borrow one immutable provider and keep no state between
//! calls, so a single provider can be shared by any number of threads.

#[macro_use]
mod macros;

pub mod bidi;
pub mod config;
pub mod error;
pub mod grapheme;
pub mod line_breaking;
pub mod provider;
pub mod script;

#[cfg(test)]
pub(crate) mod test_data;

pub use bidi::{BidiClass, BidiEngine, BidiResult, BidiScratch, Direction};
pub use config::{ConditionalJapaneseStarter, LineBreakConfig};
pub use error::{PreconditionError, UnicodeDataError, UnicodeDataResult};
pub use grapheme::{GraphemeBreakClass, GraphemeBreaker};
pub use line_breaking::{LineBreakAlgorithm, LineBreakClass, LineBreakType};
pub use provider::{
    BracketPair, BracketType, CodepointFlags, EastAsianWidth, GeneralCategory,
    IndicConjunctBreak, UnicodeDataBuilder, UnicodeDataProvider,
};
pub use script::{Script, ScriptAnalyzer};

/// Highest valid Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;
