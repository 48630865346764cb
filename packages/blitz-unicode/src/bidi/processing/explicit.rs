//! Paragraph level and explicit embedding resolution (P2, P3, X1 to X8)

use arrayvec::ArrayVec;
use log::trace;

use crate::bidi::types::{BidiClass, MAX_DEPTH};

/// Marker for "no matching character".
pub(crate) const NO_MATCH: usize = usize::MAX;

/// BD9: pair every isolate initiator with its matching PDI.
///
/// `matching_pdi` is indexed by text position and holds [`NO_MATCH`] for
/// everything but matched initiators. A paragraph separator closes every
/// open isolate.
pub(crate) fn match_isolates(classes: &[BidiClass], matching_pdi: &mut Vec<usize>) {
    matching_pdi.clear();
    matching_pdi.resize(classes.len(), NO_MATCH);

    let mut open: Vec<usize> = Vec::new();
    for (i, &class) in classes.iter().enumerate() {
        match class {
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => open.push(i),
            BidiClass::PDI => {
                if let Some(initiator) = open.pop() {
                    matching_pdi[initiator] = i;
                }
            }
            BidiClass::B => open.clear(),
            _ => {}
        }
    }
}

/// P2/P3 over `start..end`: level of the first strong character outside
/// nested isolates, `None` when there is none.
pub(crate) fn first_strong_level(
    classes: &[BidiClass],
    matching_pdi: &[usize],
    start: usize,
    end: usize,
) -> Option<u8> {
    let mut i = start;
    while i < end {
        match classes[i] {
            BidiClass::L => return Some(0),
            BidiClass::R | BidiClass::AL => return Some(1),
            BidiClass::B => return None,
            BidiClass::LRI | BidiClass::RLI | BidiClass::FSI => {
                // An unmatched isolate runs to the end of the paragraph.
                match matching_pdi[i] {
                    NO_MATCH => return None,
                    pdi => i = pdi,
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

#[derive(Debug, Clone, Copy)]
struct Status {
    level: u8,
    override_class: Option<BidiClass>,
    isolate: bool,
}

/// Least odd level above `level`.
fn next_odd(level: u8) -> u8 {
    (level + 1) | 1
}

/// Least even level above `level`.
fn next_even(level: u8) -> u8 {
    (level + 2) & !1
}

/// X1 to X8 over one paragraph `start..end`.
///
/// Writes the explicit embedding level of every character and applies
/// directional overrides to `types`. Characters removed by X9 receive the
/// level of the embedding they appear in; their final level is reassigned
/// after implicit resolution.
pub(crate) fn resolve_explicit(
    classes: &[BidiClass],
    matching_pdi: &[usize],
    start: usize,
    end: usize,
    paragraph_level: u8,
    types: &mut [BidiClass],
    levels: &mut [u8],
) {
    // Deepest level plus the paragraph entry and one spare slot.
    let mut stack: ArrayVec<Status, { MAX_DEPTH as usize + 2 }> = ArrayVec::new();
    stack.push(Status {
        level: paragraph_level,
        override_class: None,
        isolate: false,
    });

    let mut overflow_isolates = 0usize;
    let mut overflow_embeddings = 0usize;
    let mut valid_isolates = 0usize;

    for i in start..end {
        let Some(&last) = stack.last() else {
            break;
        };
        let class = classes[i];

        match class {
            // X2 to X5
            BidiClass::RLE | BidiClass::LRE | BidiClass::RLO | BidiClass::LRO => {
                levels[i] = last.level;
                let level = if matches!(class, BidiClass::RLE | BidiClass::RLO) {
                    next_odd(last.level)
                } else {
                    next_even(last.level)
                };
                let override_class = match class {
                    BidiClass::RLO => Some(BidiClass::R),
                    BidiClass::LRO => Some(BidiClass::L),
                    _ => None,
                };
                let pushed = level <= MAX_DEPTH
                    && overflow_isolates == 0
                    && overflow_embeddings == 0
                    && stack
                        .try_push(Status {
                            level,
                            override_class,
                            isolate: false,
                        })
                        .is_ok();
                if !pushed && overflow_isolates == 0 {
                    overflow_embeddings += 1;
                    trace!("Embedding overflow at {i} (level {level})");
                }
            }

            // X5a to X5c
            BidiClass::RLI | BidiClass::LRI | BidiClass::FSI => {
                levels[i] = last.level;
                if let Some(forced) = last.override_class {
                    types[i] = forced;
                }
                let rtl = match class {
                    BidiClass::RLI => true,
                    BidiClass::LRI => false,
                    _ => {
                        let isolate_end = match matching_pdi[i] {
                            NO_MATCH => end,
                            pdi => pdi,
                        };
                        first_strong_level(classes, matching_pdi, i + 1, isolate_end) == Some(1)
                    }
                };
                let level = if rtl {
                    next_odd(last.level)
                } else {
                    next_even(last.level)
                };
                let pushed = level <= MAX_DEPTH
                    && overflow_isolates == 0
                    && overflow_embeddings == 0
                    && stack
                        .try_push(Status {
                            level,
                            override_class: None,
                            isolate: true,
                        })
                        .is_ok();
                if pushed {
                    valid_isolates += 1;
                } else {
                    overflow_isolates += 1;
                    trace!("Isolate overflow at {i} (level {level})");
                }
            }

            // X6a
            BidiClass::PDI => {
                if overflow_isolates > 0 {
                    overflow_isolates -= 1;
                } else if valid_isolates > 0 {
                    overflow_embeddings = 0;
                    while stack.last().is_some_and(|status| !status.isolate) {
                        stack.pop();
                    }
                    stack.pop();
                    valid_isolates -= 1;
                }
                let current = stack.last().copied().unwrap_or(last);
                levels[i] = current.level;
                if let Some(forced) = current.override_class {
                    types[i] = forced;
                }
            }

            // X7
            BidiClass::PDF => {
                levels[i] = last.level;
                if overflow_isolates == 0 {
                    if overflow_embeddings > 0 {
                        overflow_embeddings -= 1;
                    } else if !last.isolate && stack.len() >= 2 {
                        stack.pop();
                    }
                }
            }

            // X8
            BidiClass::B => {
                levels[i] = paragraph_level;
            }

            // X6, with BN keeping the current level for X9
            _ => {
                levels[i] = last.level;
                if class != BidiClass::BN {
                    if let Some(forced) = last.override_class {
                        types[i] = forced;
                    }
                }
            }
        }
    }
}
