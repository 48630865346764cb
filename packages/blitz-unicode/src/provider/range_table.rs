//! Sorted codepoint range tables with binary-search lookup

use super::types::PropertyValue;

/// An inclusive run of codepoints sharing one property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodepointRange<P> {
    pub start: u32,
    pub end: u32,
    pub value: P,
}

/// Ranges sorted by `start`, pairwise disjoint. Gaps resolve to `default`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeTable<P> {
    ranges: Vec<CodepointRange<P>>,
    default: P,
}

impl<P: PropertyValue> RangeTable<P> {
    /// Build a table from ranges already validated as sorted and disjoint.
    pub(crate) fn from_sorted(ranges: Vec<CodepointRange<P>>, default: P) -> Self {
        debug_assert!(is_sorted_disjoint(&ranges));
        Self { ranges, default }
    }

    /// Compress a dense per-codepoint array into ranges, dropping runs equal
    /// to the default.
    pub(crate) fn from_dense(values: &[P], default: P) -> Self {
        Self::from_dense_by(values, default, |_| default)
    }

    /// Compress a dense array, dropping codepoints whose value equals the
    /// per-codepoint default computed by `default_for`.
    pub(crate) fn from_dense_by(
        values: &[P],
        default: P,
        default_for: impl Fn(u32) -> P,
    ) -> Self {
        let mut ranges: Vec<CodepointRange<P>> = Vec::new();
        for (cp, &value) in values.iter().enumerate() {
            let cp = cp as u32;
            if value == default_for(cp) {
                continue;
            }
            match ranges.last_mut() {
                Some(last) if last.value == value && last.end + 1 == cp => last.end = cp,
                _ => ranges.push(CodepointRange {
                    start: cp,
                    end: cp,
                    value,
                }),
            }
        }
        Self { ranges, default }
    }

    /// Value of the range containing `cp`, if any.
    #[inline]
    pub fn lookup(&self, cp: u32) -> Option<P> {
        let idx = self.ranges.partition_point(|range| range.end < cp);
        match self.ranges.get(idx) {
            Some(range) if range.start <= cp => Some(range.value),
            _ => None,
        }
    }

    #[inline]
    pub fn get(&self, cp: u32) -> P {
        self.lookup(cp).unwrap_or(self.default)
    }

    pub fn ranges(&self) -> &[CodepointRange<P>] {
        &self.ranges
    }

    pub fn default_value(&self) -> P {
        self.default
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

pub(crate) fn is_sorted_disjoint<P>(ranges: &[CodepointRange<P>]) -> bool {
    ranges.iter().all(|range| range.start <= range.end)
        && ranges.windows(2).all(|pair| pair[0].end < pair[1].start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::EastAsianWidth;

    #[test]
    fn lookup_hits_ranges_and_gaps() {
        let table = RangeTable::from_sorted(
            vec![
                CodepointRange { start: 0x20, end: 0x7E, value: EastAsianWidth::Narrow },
                CodepointRange { start: 0x1100, end: 0x115F, value: EastAsianWidth::Wide },
            ],
            EastAsianWidth::Neutral,
        );
        assert_eq!(table.get(0x20), EastAsianWidth::Narrow);
        assert_eq!(table.get(0x7E), EastAsianWidth::Narrow);
        assert_eq!(table.get(0x7F), EastAsianWidth::Neutral);
        assert_eq!(table.get(0x1100), EastAsianWidth::Wide);
        assert_eq!(table.get(0x0), EastAsianWidth::Neutral);
        assert_eq!(table.get(u32::MAX), EastAsianWidth::Neutral);
    }

    #[test]
    fn dense_compression_merges_adjacent_runs() {
        let mut dense = vec![false; 16];
        dense[2] = true;
        dense[3] = true;
        dense[4] = true;
        dense[9] = true;
        let table = RangeTable::from_dense(&dense, false);
        assert_eq!(table.len(), 2);
        assert_eq!(table.ranges()[0].start, 2);
        assert_eq!(table.ranges()[0].end, 4);
        assert_eq!(table.ranges()[1].start, 9);
        assert!(table.get(3));
        assert!(!table.get(5));
    }

    #[test]
    fn detects_overlap() {
        let ranges = [
            CodepointRange { start: 0, end: 5, value: true },
            CodepointRange { start: 5, end: 6, value: true },
        ];
        assert!(!is_sorted_disjoint(&ranges));
    }
}
