// ===== keysmith/src/metrics/speed.rs =====
use crate::corpus::Corpus;
use crate::geometry::{Finger, Geometry, Pos, COLS, FINGER_COUNT, ROWS};
use crate::layout::Layout;

/// Travel charged for a same-finger repeat (dist would otherwise be zero).
const SAME_KEY_TRAVEL: f64 = 0.5;

/// Relative stroke rate per finger; faster fingers absorb travel cheaper.
fn strength(f: Finger) -> f64 {
    match f.roll_order() {
        1 => 5.5,
        2 => 5.0,
        3 => 4.5,
        _ => 3.5,
    }
}

/// Static model: per-finger cost of home-row reaches plus same-finger
/// bigram travel, weighted by corpus frequency and finger strength.
pub fn finger_speed(layout: &Layout, corpus: &Corpus, geom: &Geometry) -> [f64; FINGER_COUNT] {
    let mut speeds = [0.0f64; FINGER_COUNT];

    for row in 0..ROWS {
        for col in 0..COLS {
            let p = Pos::new(row, col);
            let f = geom.finger(p);
            let freq = corpus.letter_freq(layout.key_at(p));
            speeds[f as usize] += geom.distance(geom.home(f), p) * freq / strength(f);
        }
    }

    for &(a, b, freq) in corpus.bigrams() {
        let (Some(pa), Some(pb)) = (layout.pos_of(a), layout.pos_of(b)) else {
            continue;
        };
        let f = geom.finger(pa);
        if f != geom.finger(pb) {
            continue;
        }
        let dist = if pa == pb {
            SAME_KEY_TRAVEL
        } else {
            geom.distance(pa, pb)
        };
        speeds[f as usize] += dist * freq / strength(f);
    }

    speeds
}

/// Dynamic variant: scales each finger's static cost by its actual load
/// under the layout. The factor is 1.0 at a uniform 1/8 load share.
pub fn dynamic_finger_speed(
    layout: &Layout,
    corpus: &Corpus,
    geom: &Geometry,
) -> [f64; FINGER_COUNT] {
    let mut speeds = finger_speed(layout, corpus, geom);

    let mut load = [0.0f64; FINGER_COUNT];
    let mut total = 0.0;
    for row in 0..ROWS {
        for col in 0..COLS {
            let p = Pos::new(row, col);
            let freq = corpus.letter_freq(layout.key_at(p));
            load[geom.finger(p) as usize] += freq;
            total += freq;
        }
    }

    if total > 0.0 {
        for (s, l) in speeds.iter_mut().zip(load) {
            *s *= 0.5 + 4.0 * (l / total);
        }
    }

    speeds
}
