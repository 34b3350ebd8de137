// ===== keysmith/src/optimizer/runner.rs =====
use crate::corpus::Corpus;
use crate::error::{KeysmithError, KsResult};
use crate::geometry::{Pos, COLS};
use crate::layout::Layout;
use crate::optimizer::{greedy_improve, tiered_improve};
use crate::reports;
use crate::scorer::Scorer;
use fastrand::Rng;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::info;

/// Cohort size retained for the tiered wave.
pub const RETAIN: usize = 100;

/// Columns reachable from the index home positions; the normalization
/// pass leaves these as the optimizer found them.
const HOME_COLS: std::ops::RangeInclusive<usize> = 3..=6;

/// A layout with a lazily computed score. `None` marks a stale cache.
pub struct Scored {
    pub layout: Layout,
    pub score: Option<f64>,
}

/// Fills any missing scores, then stable-sorts ascending by cost.
pub fn rank(cohort: &mut [Scored], scorer: &Scorer) {
    for s in cohort.iter_mut() {
        if s.score.is_none() {
            s.score = Some(scorer.score(&s.layout));
        }
    }
    cohort.sort_by(|a, b| {
        a.score
            .unwrap_or(f64::MAX)
            .total_cmp(&b.score.unwrap_or(f64::MAX))
    });
}

/// Top row of every non-home column should hold the more frequent symbol;
/// home columns (3..=6) are already index-reachable and stay untouched.
pub fn normalize_rows(layout: &mut Layout, corpus: &Corpus) {
    for col in 0..COLS {
        if HOME_COLS.contains(&col) {
            continue;
        }
        let top = Pos::new(0, col);
        let bottom = Pos::new(2, col);
        if corpus.letter_freq(layout.key_at(top)) < corpus.letter_freq(layout.key_at(bottom)) {
            layout.swap(top, bottom);
        }
    }
}

/// Full search pipeline: N random layouts, a greedy wave over all of
/// them, a tiered wave over the top `RETAIN`, then row normalization of
/// the winner. Returns the best layout found.
pub fn populate(scorer: Arc<Scorer>, n: usize, seed: Option<u64>) -> KsResult<Layout> {
    if n == 0 {
        return Err(KeysmithError::Config(
            "population must be at least 1".to_string(),
        ));
    }

    info!("🌱 Generating {} random layouts...", n);
    let mut master_rng = match seed {
        Some(s) => Rng::with_seed(s),
        None => Rng::new(),
    };
    let mut cohort: Vec<Scored> = (0..n)
        .map(|_| Scored {
            layout: Layout::random(&scorer.corpus, &mut master_rng),
            score: None,
        })
        .collect();

    run_wave(&scorer, &mut cohort, seed, "greedy", |layout, sc, rng| {
        greedy_improve(layout, sc, rng);
    });

    info!("Sorting...");
    rank(&mut cohort, &scorer);
    for (i, s) in cohort.iter().take(3).enumerate() {
        reports::print_layout_grid(&format!("#{}", i + 1), &s.layout);
        info!("score: {:.2}", s.score.unwrap_or(f64::MAX));
    }

    cohort.truncate(RETAIN);

    run_wave(&scorer, &mut cohort, seed, "tiered", |layout, sc, rng| {
        tiered_improve(layout, sc, rng);
    });

    rank(&mut cohort, &scorer);

    let mut best = cohort.swap_remove(0).layout;
    normalize_rows(&mut best, &scorer.corpus);

    reports::print_analysis(&best, &scorer);
    reports::heatmap(&best, &scorer.corpus);

    Ok(best)
}

/// Runs one search engine over every layout in the cohort, one rayon
/// worker per layout. The parallel iterator's join is the wave's counting
/// barrier; a detached timer thread reports throughput once per second
/// until the barrier releases. Scores are invalidated as workers finish.
fn run_wave<F>(scorer: &Arc<Scorer>, cohort: &mut [Scored], seed: Option<u64>, label: &str, improve: F)
where
    F: Fn(&mut Layout, &Scorer, &mut Rng) + Sync,
{
    info!("🔥 {} improving {} layouts...", label, cohort.len());

    let stop = Arc::new(AtomicBool::new(false));
    let reporter = spawn_reporter(scorer.clone(), stop.clone(), label.to_string());

    cohort.par_iter_mut().enumerate().for_each(|(i, s)| {
        let mut rng = match seed {
            Some(sd) => Rng::with_seed(sd.wrapping_add(i as u64 + 1)),
            None => Rng::new(),
        };
        improve(&mut s.layout, scorer, &mut rng);
        s.score = None;
    });

    stop.store(true, Ordering::Relaxed);
    let _ = reporter.join();
}

fn spawn_reporter(
    scorer: Arc<Scorer>,
    stop: Arc<AtomicBool>,
    label: String,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last = scorer.evaluations();
        while !stop.load(Ordering::Relaxed) {
            thread::sleep(Duration::from_secs(1));
            if stop.load(Ordering::Relaxed) {
                break;
            }
            let now = scorer.evaluations();
            info!("{} wave running at {} evals/s", label, now - last);
            last = now;
        }
    })
}
