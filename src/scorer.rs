// ===== keysmith/src/scorer.rs =====
use crate::config::ScoringWeights;
use crate::corpus::Corpus;
use crate::geometry::Geometry;
use crate::layout::Layout;
use crate::metrics::{balance, speed, trigrams};
use std::sync::atomic::{AtomicU64, Ordering};

/// Combines the metric collaborators into one scalar cost (lower is
/// better). Shared read-only across all search workers via `Arc`.
pub struct Scorer {
    pub weights: ScoringWeights,
    pub corpus: Corpus,
    pub geometry: Geometry,
    /// Selects the layout-dependent finger-speed model.
    pub dynamic: bool,

    analyzed: AtomicU64,
}

impl Scorer {
    pub fn new(corpus: Corpus, weights: ScoringWeights, dynamic: bool) -> Self {
        Scorer {
            weights,
            corpus,
            geometry: Geometry::standard(),
            dynamic,
            analyzed: AtomicU64::new(0),
        }
    }

    /// Weighted cost of a layout. A term is only computed when its
    /// coefficient is live: zero disables the speed and balance terms, a
    /// trigram precision of -1 disables the trigram term.
    pub fn score(&self, layout: &Layout) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;

        if w.fspeed != 0.0 {
            let speeds = if self.dynamic {
                speed::dynamic_finger_speed(layout, &self.corpus, &self.geometry)
            } else {
                speed::finger_speed(layout, &self.corpus, &self.geometry)
            };
            score += w.fspeed * speeds.iter().sum::<f64>();
        }

        if w.trigram_precision != -1 {
            let n = if w.trigram_precision <= 0 {
                self.corpus.trigram_count()
            } else {
                w.trigram_precision as usize
            };
            let tri = trigrams::fast_trigrams(layout, &self.corpus, &self.geometry, n);
            // The sampler guarantees a positive total for any corpus with
            // trigram data; a zero total is its invariant to uphold.
            let total = tri[trigrams::TOTAL];
            score += w.roll * (100.0 - 100.0 * tri[trigrams::ROLL] / total);
            score += w.alternate * (100.0 - 100.0 * tri[trigrams::ALTERNATE] / total);
            score += w.onehand * (100.0 - 100.0 * tri[trigrams::ONEHAND] / total);
            score += w.redirect * (100.0 * tri[trigrams::REDIRECT] / total);
        }

        if w.index_balance != 0.0 {
            let (left, right) = balance::index_usage(layout, &self.corpus, &self.geometry);
            score += w.index_balance * (right - left).abs();
        }

        // Throughput counter only; relaxed is enough.
        self.analyzed.fetch_add(1, Ordering::Relaxed);

        score
    }

    /// Total score evaluations across all workers since construction.
    pub fn evaluations(&self) -> u64 {
        self.analyzed.load(Ordering::Relaxed)
    }
}
