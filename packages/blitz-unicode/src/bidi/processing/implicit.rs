//! Implicit levels (I1, I2) and the level fixups that follow them

use crate::bidi::types::BidiClass::{self, *};

/// I1 and I2 for one sequence.
pub(crate) fn resolve_implicit(types: &[BidiClass], positions: &[usize], levels: &mut [u8]) {
    for (&t, &pos) in types.iter().zip(positions) {
        let level = levels[pos];
        levels[pos] = if level & 1 == 0 {
            match t {
                R => level + 1,
                AN | EN => level + 2,
                _ => level,
            }
        } else {
            match t {
                L | EN | AN => level + 1,
                _ => level,
            }
        };
    }
}

/// Characters removed by X9 take the level of the character before them,
/// or the paragraph level at the start.
pub(crate) fn assign_removed_levels(
    classes: &[BidiClass],
    levels: &mut [u8],
    start: usize,
    end: usize,
    paragraph_level: u8,
) {
    let mut previous = paragraph_level;
    for i in start..end {
        if classes[i].is_removed_by_x9() {
            levels[i] = previous;
        }
        previous = levels[i];
    }
}

/// L1 with `start..end` as a single line.
pub(crate) fn reset_whitespace(
    classes: &[BidiClass],
    levels: &mut [u8],
    start: usize,
    end: usize,
    paragraph_level: u8,
) {
    let mut trailing = true;
    for i in (start..end).rev() {
        let class = classes[i];
        if matches!(class, S | B) {
            levels[i] = paragraph_level;
            trailing = true;
        } else if trailing && class.is_trailing_whitespace() {
            levels[i] = paragraph_level;
        } else {
            trailing = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_levels() {
        let mut levels = vec![0, 0, 0, 1, 1, 1];
        resolve_implicit(&[R, EN, L, L, AN, R], &[0, 1, 2, 3, 4, 5], &mut levels);
        assert_eq!(levels, vec![1, 2, 0, 2, 2, 1]);
    }

    #[test]
    fn implicit_only_touches_sequence_positions() {
        let mut levels = vec![0, 0, 0];
        resolve_implicit(&[R], &[2], &mut levels);
        assert_eq!(levels, vec![0, 0, 1]);
    }

    #[test]
    fn removed_characters_copy_the_previous_level() {
        let classes = [BN, L, RLE, R, PDF];
        let mut levels = vec![5, 2, 9, 3, 9];
        assign_removed_levels(&classes, &mut levels, 0, 5, 1);
        assert_eq!(levels, vec![1, 2, 2, 3, 3]);
    }

    #[test]
    fn whitespace_reset() {
        let classes = [L, WS, S, R, WS, LRI, PDI, BN];
        let mut levels = vec![2, 2, 2, 1, 1, 2, 2, 2];
        reset_whitespace(&classes, &mut levels, 0, 8, 1);
        assert_eq!(levels, vec![2, 1, 1, 1, 1, 1, 1, 1]);

        let classes = [WS, R, WS, L];
        let mut levels = vec![0, 1, 1, 0];
        reset_whitespace(&classes, &mut levels, 0, 4, 0);
        assert_eq!(levels, vec![0, 1, 1, 0]);
    }
}
