//! Weak type resolution (W1 to W7) over one isolating run sequence

use crate::bidi::types::BidiClass::{self, *};

/// Apply W1 to W7 in order to the types of one sequence.
pub(crate) fn resolve_weak(types: &mut [BidiClass], sos: BidiClass) {
    let len = types.len();

    // W1
    for i in 0..len {
        if types[i] == NSM {
            types[i] = match i.checked_sub(1).map(|prev| types[prev]) {
                None => sos,
                Some(prev) if prev.is_isolate_initiator() || prev == PDI => ON,
                Some(prev) => prev,
            };
        }
    }

    // W2
    let mut last_strong = sos;
    for t in types.iter_mut() {
        match *t {
            L | R | AL => last_strong = *t,
            EN if last_strong == AL => *t = AN,
            _ => {}
        }
    }

    // W3
    for t in types.iter_mut() {
        if *t == AL {
            *t = R;
        }
    }

    // W4
    for i in 1..len.saturating_sub(1) {
        let (prev, next) = (types[i - 1], types[i + 1]);
        match types[i] {
            ES if prev == EN && next == EN => types[i] = EN,
            CS if prev == next && matches!(prev, EN | AN) => types[i] = prev,
            _ => {}
        }
    }

    // W5
    let mut i = 0;
    while i < len {
        if types[i] != ET {
            i += 1;
            continue;
        }
        let run_end = types[i..]
            .iter()
            .position(|&t| t != ET)
            .map_or(len, |offset| i + offset);
        let touches_number =
            (i > 0 && types[i - 1] == EN) || (run_end < len && types[run_end] == EN);
        if touches_number {
            types[i..run_end].fill(EN);
        }
        i = run_end;
    }

    // W6
    for t in types.iter_mut() {
        if matches!(*t, ES | ET | CS) {
            *t = ON;
        }
    }

    // W7
    let mut last_strong = sos;
    for t in types.iter_mut() {
        match *t {
            L | R => last_strong = *t,
            EN if last_strong == L => *t = L,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weak(types: &[BidiClass], sos: BidiClass) -> Vec<BidiClass> {
        let mut types = types.to_vec();
        resolve_weak(&mut types, sos);
        types
    }

    #[test]
    fn nonspacing_marks_follow_their_base() {
        assert_eq!(weak(&[NSM, R], R), vec![R, R]);
        assert_eq!(weak(&[AL, NSM], L), vec![R, R]);
        assert_eq!(weak(&[LRI, NSM], L), vec![LRI, ON]);
        assert_eq!(weak(&[PDI, NSM], R), vec![PDI, ON]);
    }

    #[test]
    fn numbers_after_arabic_letters() {
        assert_eq!(weak(&[AL, EN], L), vec![R, AN]);
        assert_eq!(weak(&[AL, ON, EN], L), vec![R, ON, AN]);
        assert_eq!(weak(&[EN], R), vec![EN]);
    }

    #[test]
    fn separators_between_numbers() {
        assert_eq!(weak(&[EN, ES, EN], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[AN, CS, AN], R), vec![AN, AN, AN]);
        assert_eq!(weak(&[AN, ES, AN], R), vec![AN, ON, AN]);
        assert_eq!(weak(&[EN, CS, CS, EN], R), vec![EN, ON, ON, EN]);
    }

    #[test]
    fn terminators_join_european_numbers() {
        assert_eq!(weak(&[ET, ET, EN], R), vec![EN, EN, EN]);
        assert_eq!(weak(&[EN, ET], R), vec![EN, EN]);
        assert_eq!(weak(&[AN, ET], R), vec![AN, ON]);
        assert_eq!(weak(&[AL, ET, EN], L), vec![R, ON, AN]);
    }

    #[test]
    fn european_numbers_after_left_to_right() {
        assert_eq!(weak(&[L, ON, EN], R), vec![L, ON, L]);
        assert_eq!(weak(&[EN], L), vec![L]);
        assert_eq!(weak(&[R, EN], L), vec![R, EN]);
    }
}
