//! Visual reordering (L2) and mirroring (L4)

use crate::error::PreconditionError;
use crate::provider::UnicodeDataProvider;

/// L2 over the inclusive line `start..=end` of `levels`.
///
/// `out[v]` receives the logical index displayed at visual position `v`.
pub(crate) fn reorder_line(
    levels: &[u8],
    start: usize,
    end: usize,
    out: &mut [usize],
) -> Result<(), PreconditionError> {
    if start > end || end >= levels.len() {
        return Err(PreconditionError::InvalidLineRange {
            start,
            end,
            len: levels.len(),
        });
    }
    PreconditionError::check_len(end - start + 1, out.len())?;
    reorder_run(levels, start, out);
    Ok(())
}

/// L2 over `levels[start..start + out.len()]`, with the range already
/// checked by the caller.
pub(crate) fn reorder_run(levels: &[u8], start: usize, out: &mut [usize]) {
    let end = start + out.len();
    for (visual, slot) in out.iter_mut().enumerate() {
        *slot = start + visual;
    }

    let line = &levels[start..end];
    let (Some(&highest), Some(&lowest)) = (line.iter().max(), line.iter().min()) else {
        return;
    };
    let lowest_odd = lowest | 1;

    let mut level = highest;
    while level >= lowest_odd {
        let mut v = 0;
        while v < out.len() {
            if levels[out[v]] < level {
                v += 1;
                continue;
            }
            let run_start = v;
            while v < out.len() && levels[out[v]] >= level {
                v += 1;
            }
            out[run_start..v].reverse();
        }
        level -= 1;
    }
}

/// Turn a visual-to-logical order into logical-to-visual, or back.
///
/// The values of `order` must be a permutation of `base..base + len` for
/// some `base`; the result is indexed relative to that base.
pub fn invert_permutation(order: &[usize]) -> Vec<usize> {
    let base = order.iter().copied().min().unwrap_or(0);
    let mut inverse = vec![0; order.len()];
    for (position, &index) in order.iter().enumerate() {
        if let Some(slot) = inverse.get_mut(index - base) {
            *slot = position;
        }
    }
    inverse
}

/// L4: replace characters at odd levels by their Bidi_Mirroring_Glyph.
pub(crate) fn mirror_codepoints(data: &UnicodeDataProvider, codepoints: &mut [u32], levels: &[u8]) {
    for (cp, &level) in codepoints.iter_mut().zip(levels) {
        if level & 1 == 1 {
            if let Some(mirrored) = data.mirror(*cp) {
                *cp = mirrored;
            }
        }
    }
}
