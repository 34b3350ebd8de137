// ===== keysmith/src/metrics/trigrams.rs =====
use crate::corpus::Corpus;
use crate::geometry::{Geometry, Pos};
use crate::layout::Layout;

// Slots of the count vector returned by `fast_trigrams`.
pub const ROLL: usize = 0;
pub const ALTERNATE: usize = 1;
pub const ONEHAND: usize = 2;
pub const REDIRECT: usize = 3;
pub const TOTAL: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrigramKind {
    /// Exactly two keys on one hand, on different fingers.
    Roll,
    /// The hand changes on both transitions.
    Alternate,
    /// Single hand, monotonic finger direction.
    Onehand,
    /// Single hand, direction change mid-sequence.
    Redirect,
    Other,
}

pub fn classify(geom: &Geometry, p1: Pos, p2: Pos, p3: Pos) -> TrigramKind {
    let h1 = geom.hand(p1);
    let h2 = geom.hand(p2);
    let h3 = geom.hand(p3);

    if h1 != h2 && h2 != h3 {
        return TrigramKind::Alternate;
    }

    let f1 = geom.finger(p1).roll_order();
    let f2 = geom.finger(p2).roll_order();
    let f3 = geom.finger(p3).roll_order();

    if h1 == h2 && h2 == h3 {
        let d1 = f2 - f1;
        let d2 = f3 - f2;
        // Same-finger transitions are neither rolls nor redirects.
        if d1 != 0 && d2 != 0 {
            if d1.signum() == d2.signum() {
                return TrigramKind::Onehand;
            }
            return TrigramKind::Redirect;
        }
        return TrigramKind::Other;
    }

    // Exactly two keys share a hand.
    let same_finger = if h1 == h2 { f1 == f2 } else { f2 == f3 };
    if same_finger {
        TrigramKind::Other
    } else {
        TrigramKind::Roll
    }
}

/// Samples the `precision` most frequent corpus trigrams against the
/// layout, returning frequency-weighted counts
/// `[roll, alternate, onehand, redirect, total]`.
pub fn fast_trigrams(
    layout: &Layout,
    corpus: &Corpus,
    geom: &Geometry,
    precision: usize,
) -> [f64; 5] {
    let mut counts = [0.0f64; 5];

    for t in corpus.trigrams_top(precision) {
        let (Some(p1), Some(p2), Some(p3)) = (
            layout.pos_of(t.keys[0]),
            layout.pos_of(t.keys[1]),
            layout.pos_of(t.keys[2]),
        ) else {
            continue;
        };

        match classify(geom, p1, p2, p3) {
            TrigramKind::Roll => counts[ROLL] += t.freq,
            TrigramKind::Alternate => counts[ALTERNATE] += t.freq,
            TrigramKind::Onehand => counts[ONEHAND] += t.freq,
            TrigramKind::Redirect => counts[REDIRECT] += t.freq,
            TrigramKind::Other => {}
        }
        counts[TOTAL] += t.freq;
    }

    counts
}
