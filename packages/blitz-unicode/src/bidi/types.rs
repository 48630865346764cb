//! Bidi_Class values and the public BiDi result types

use crate::error::PreconditionError;

/// Deepest explicit embedding level (BD2).
pub const MAX_DEPTH: u8 = 125;

property_enum! {
    /// Bidi_Class property values (UAX #9, Table 4).
    pub enum BidiClass {
        L => ["L", "Left_To_Right"],
        R => ["R", "Right_To_Left"],
        AL => ["AL", "Arabic_Letter"],
        EN => ["EN", "European_Number"],
        ES => ["ES", "European_Separator"],
        ET => ["ET", "European_Terminator"],
        AN => ["AN", "Arabic_Number"],
        CS => ["CS", "Common_Separator"],
        NSM => ["NSM", "Nonspacing_Mark"],
        BN => ["BN", "Boundary_Neutral"],
        B => ["B", "Paragraph_Separator"],
        S => ["S", "Segment_Separator"],
        WS => ["WS", "White_Space"],
        ON => ["ON", "Other_Neutral"],
        LRE => ["LRE", "Left_To_Right_Embedding"],
        LRO => ["LRO", "Left_To_Right_Override"],
        RLE => ["RLE", "Right_To_Left_Embedding"],
        RLO => ["RLO", "Right_To_Left_Override"],
        PDF => ["PDF", "Pop_Directional_Format"],
        LRI => ["LRI", "Left_To_Right_Isolate"],
        RLI => ["RLI", "Right_To_Left_Isolate"],
        FSI => ["FSI", "First_Strong_Isolate"],
        PDI => ["PDI", "Pop_Directional_Isolate"],
    }
}

impl BidiClass {
    /// L, R or AL.
    #[inline]
    pub fn is_strong(self) -> bool {
        matches!(self, BidiClass::L | BidiClass::R | BidiClass::AL)
    }

    #[inline]
    pub fn is_isolate_initiator(self) -> bool {
        matches!(self, BidiClass::LRI | BidiClass::RLI | BidiClass::FSI)
    }

    /// Embedding controls and boundary neutrals, which X9 drops from the
    /// resolution phases.
    #[inline]
    pub fn is_removed_by_x9(self) -> bool {
        matches!(
            self,
            BidiClass::LRE
                | BidiClass::RLE
                | BidiClass::LRO
                | BidiClass::RLO
                | BidiClass::PDF
                | BidiClass::BN
        )
    }

    /// The NI set of N1 and N2.
    #[inline]
    pub fn is_neutral_or_isolate(self) -> bool {
        matches!(
            self,
            BidiClass::B
                | BidiClass::S
                | BidiClass::WS
                | BidiClass::ON
                | BidiClass::LRI
                | BidiClass::RLI
                | BidiClass::FSI
                | BidiClass::PDI
        )
    }

    /// Characters L1 resets when they trail a line or precede a separator.
    #[inline]
    pub(crate) fn is_trailing_whitespace(self) -> bool {
        matches!(
            self,
            BidiClass::WS | BidiClass::LRI | BidiClass::RLI | BidiClass::FSI | BidiClass::PDI
        ) || self.is_removed_by_x9()
    }

    /// Strong direction of an embedding level.
    #[inline]
    pub(crate) fn for_level(level: u8) -> Self {
        if level & 1 == 0 {
            BidiClass::L
        } else {
            BidiClass::R
        }
    }
}

/// Paragraph direction requested by the caller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    Default,
)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
    /// Resolve from the first strong character (P2, P3).
    Auto,
}

impl Direction {
    /// Fixed paragraph level, `None` for `Auto`.
    pub fn level(self) -> Option<u8> {
        match self {
            Direction::LeftToRight => Some(0),
            Direction::RightToLeft => Some(1),
            Direction::Auto => None,
        }
    }
}

/// 0 = LTR, 1 = RTL, 2 = Auto, as used by the conformance files.
impl TryFrom<i32> for Direction {
    type Error = PreconditionError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::LeftToRight),
            1 => Ok(Direction::RightToLeft),
            2 => Ok(Direction::Auto),
            other => Err(PreconditionError::InvalidDirection(other)),
        }
    }
}

/// Output of [`BidiEngine::process`](super::BidiEngine::process).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BidiResult {
    /// One resolved embedding level per input codepoint.
    pub levels: Vec<u8>,
    /// Embedding level of the first paragraph.
    pub paragraph_level: u8,
}

impl BidiResult {
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether the first paragraph runs right to left.
    pub fn is_rtl(&self) -> bool {
        self.paragraph_level & 1 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::PropertyValue;

    #[test]
    fn direction_from_numeric_code() {
        assert_eq!(Direction::try_from(0), Ok(Direction::LeftToRight));
        assert_eq!(Direction::try_from(1), Ok(Direction::RightToLeft));
        assert_eq!(Direction::try_from(2), Ok(Direction::Auto));
        assert_eq!(
            Direction::try_from(3),
            Err(PreconditionError::InvalidDirection(3))
        );
        assert_eq!(
            Direction::try_from(-1),
            Err(PreconditionError::InvalidDirection(-1))
        );
    }

    #[test]
    fn class_names_and_bytes() {
        assert_eq!(BidiClass::ALL.len(), 23);
        assert_eq!(BidiClass::from_name("Arabic_Letter"), Some(BidiClass::AL));
        assert_eq!(BidiClass::from_name("nsm"), Some(BidiClass::NSM));
        assert_eq!(BidiClass::from_byte(BidiClass::PDI.to_byte()), Some(BidiClass::PDI));
        assert_eq!(BidiClass::from_byte(23), None);
    }

    #[test]
    fn class_groups() {
        assert!(BidiClass::AL.is_strong());
        assert!(!BidiClass::EN.is_strong());
        assert!(BidiClass::BN.is_removed_by_x9());
        assert!(!BidiClass::LRI.is_removed_by_x9());
        assert!(BidiClass::PDI.is_neutral_or_isolate());
        assert!(BidiClass::PDF.is_trailing_whitespace());
        assert_eq!(BidiClass::for_level(3), BidiClass::R);
    }
}
