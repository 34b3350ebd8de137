// ===== keysmith/benches/scoring_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use keysmith::config::ScoringWeights;
use keysmith::corpus::Corpus;
use keysmith::geometry::Pos;
use keysmith::layout::{Layout, ALPHABET};
use keysmith::scorer::Scorer;
use std::hint::black_box;
use std::io::Cursor;

fn setup_corpus() -> Corpus {
    // Synthetic data: every letter weighted, plus a dense trigram table so
    // the sampler has a realistic prefix to walk.
    let mut data = String::new();
    for (i, &b) in ALPHABET.iter().enumerate() {
        data.push_str(&format!("{}\t{}\n", b as char, 5000 - i * 50));
    }
    for &b1 in ALPHABET.iter() {
        for &b2 in ALPHABET.iter().take(10) {
            data.push_str(&format!("{}{}\t{}\n", b1 as char, b2 as char, 60));
            for &b3 in ALPHABET.iter().take(4) {
                data.push_str(&format!(
                    "{}{}{}\t{}\n",
                    b1 as char, b2 as char, b3 as char, 25
                ));
            }
        }
    }
    Corpus::from_reader(Cursor::new(data)).expect("synthetic corpus is valid")
}

fn criterion_benchmark(c: &mut Criterion) {
    let corpus = setup_corpus();
    let scorer = Scorer::new(corpus.clone(), ScoringWeights::default(), false);
    let mut rng = fastrand::Rng::with_seed(99);
    let layout = Layout::random(&corpus, &mut rng);

    c.bench_function("score (500 trigrams)", |b| {
        b.iter(|| scorer.score(black_box(&layout)))
    });

    let full = Scorer::new(
        corpus.clone(),
        ScoringWeights {
            trigram_precision: 0,
            ..Default::default()
        },
        false,
    );
    c.bench_function("score (all trigrams)", |b| {
        b.iter(|| full.score(black_box(&layout)))
    });

    c.bench_function("swap_and_score", |b| {
        let mut working = layout.clone();
        b.iter(|| {
            let a = Pos::new(rng.usize(0..3), rng.usize(0..10));
            let z = Pos::new(rng.usize(0..3), rng.usize(0..10));
            working.swap(a, z);
            let s = scorer.score(black_box(&working));
            working.swap(a, z);
            s
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
