// ===== keysmith/src/optimizer/mod.rs =====
pub mod runner;

use crate::geometry::{Pos, COLS, ROWS};
use crate::layout::Layout;
use crate::scorer::Scorer;
use fastrand::Rng;

/// Consecutive rejections before the greedy search gives up.
pub const GREEDY_STAGNATION_BOUND: usize = 500;

/// Tiers escalate 1..=3; exceeding MAX_TIER terminates the search.
const MAX_TIER: usize = 3;
const START_TIER: usize = 2;

fn patience_for(tier: usize) -> usize {
    900 * tier * tier
}

pub fn rand_pos(rng: &mut Rng) -> Pos {
    Pos::new(rng.usize(0..ROWS), rng.usize(0..COLS))
}

/// Greedy single-swap hill climber. Mutates the layout in place, keeping
/// only strictly improving swaps, until the stagnation bound is hit.
pub fn greedy_improve(layout: &mut Layout, scorer: &Scorer, rng: &mut Rng) {
    let mut current = scorer.score(layout);
    let mut stuck = 0;

    loop {
        let a = rand_pos(rng);
        let b = rand_pos(rng);
        layout.swap(a, b);

        let candidate = scorer.score(layout);
        if candidate < current {
            current = candidate;
            stuck = 0;
        } else {
            layout.swap(a, b);
            stuck += 1;
        }

        if stuck > GREEDY_STAGNATION_BOUND {
            return;
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TieredStats {
    pub accepted: usize,
    pub rejected: usize,
}

/// Tiered multi-swap search: apply `tier` random swaps at once, roll all
/// of them back on non-improvement. A tier that produced any improvement
/// is rewarded by dropping back to tier 1 (small moves are cheap); a tier
/// that stalled escalates, with patience growing quadratically to justify
/// the stronger perturbation. Terminates when the tier would exceed 3.
pub fn tiered_improve(layout: &mut Layout, scorer: &Scorer, rng: &mut Rng) -> TieredStats {
    let mut tier = START_TIER;
    let mut patience = patience_for(tier);
    let mut since_change = 0usize;
    let mut changed = false;
    let mut stats = TieredStats::default();
    let mut swaps: Vec<(Pos, Pos)> = Vec::with_capacity(MAX_TIER);

    let mut current = scorer.score(layout);

    loop {
        since_change += 1;
        swaps.clear();
        for _ in 0..tier {
            let a = rand_pos(rng);
            let b = rand_pos(rng);
            layout.swap(a, b);
            swaps.push((a, b));
        }

        let candidate = scorer.score(layout);
        if candidate < current {
            current = candidate;
            since_change = 0;
            changed = true;
            stats.accepted += 1;
            continue;
        }

        // Undo in reverse order; overlapping swaps do not commute.
        for &(a, b) in swaps.iter().rev() {
            layout.swap(a, b);
        }
        stats.rejected += 1;

        if since_change > patience {
            if changed {
                tier = 1;
            } else {
                tier += 1;
            }
            patience = patience_for(tier);
            changed = false;
            since_change = 0;

            if tier > MAX_TIER {
                return stats;
            }
        }
    }
}
