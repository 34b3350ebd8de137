use crate::corpus::Corpus;
use crate::geometry::{Geometry, Hand, Pos, COLS, ROWS};
use crate::layout::Layout;

/// Fraction of total typed frequency carried by each index finger,
/// returned as `(left, right)` in [0, 1].
pub fn index_usage(layout: &Layout, corpus: &Corpus, geom: &Geometry) -> (f64, f64) {
    let mut left = 0.0;
    let mut right = 0.0;
    let mut total = 0.0;

    for row in 0..ROWS {
        for col in 0..COLS {
            let p = Pos::new(row, col);
            let freq = corpus.letter_freq(layout.key_at(p));
            total += freq;

            let finger = geom.finger(p);
            if finger.is_index() {
                match finger.hand() {
                    Hand::Left => left += freq,
                    Hand::Right => right += freq,
                }
            }
        }
    }

    if total > 0.0 {
        (left / total, right / total)
    } else {
        (0.0, 0.0)
    }
}
