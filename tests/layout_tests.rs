mod common;

use keysmith::layout::{Layout, ALPHABET};
use keysmith::layouts::KnownLayout;
use strum::IntoEnumIterator;

use keysmith::geometry::Pos;

fn assert_valid_permutation(layout: &Layout) {
    let mut counts = [0usize; 256];
    for row in layout.rows() {
        for &b in row {
            counts[b as usize] += 1;
        }
    }
    for &b in ALPHABET {
        assert_eq!(counts[b as usize], 1, "symbol '{}' misplaced", b as char);
        let pos = layout.pos_of(b).expect("symbol has a position");
        assert_eq!(layout.key_at(pos), b, "reverse map inconsistent");
    }
}

#[test]
fn random_layout_is_permutation() {
    let corpus = common::test_corpus();
    let mut rng = fastrand::Rng::with_seed(7);
    for _ in 0..20 {
        let layout = Layout::random(&corpus, &mut rng);
        assert_valid_permutation(&layout);
    }
}

#[test]
fn random_layout_total_freq_is_alphabet_sum() {
    let corpus = common::test_corpus();
    let mut rng = fastrand::Rng::with_seed(11);
    let layout = Layout::random(&corpus, &mut rng);

    let expected: f64 = ALPHABET.iter().map(|&b| corpus.letter_freq(b)).sum();
    assert!((layout.total_freq() - expected).abs() < 1e-9);
}

#[test]
fn swap_is_involution() {
    let corpus = common::test_corpus();
    let mut rng = fastrand::Rng::with_seed(3);
    let original = Layout::random(&corpus, &mut rng);

    let mut layout = original.clone();
    let a = Pos::new(0, 1);
    let b = Pos::new(2, 8);
    layout.swap(a, b);
    assert_ne!(layout, original);
    layout.swap(a, b);
    assert_eq!(layout, original);

    // Degenerate pair: swapping a cell with itself is a no-op.
    layout.swap(a, a);
    assert_eq!(layout, original);
}

#[test]
fn swap_preserves_total_freq() {
    let corpus = common::test_corpus();
    let mut rng = fastrand::Rng::with_seed(5);
    let mut layout = Layout::random(&corpus, &mut rng);
    let before = layout.total_freq();

    for _ in 0..100 {
        let a = Pos::new(rng.usize(0..3), rng.usize(0..10));
        let b = Pos::new(rng.usize(0..3), rng.usize(0..10));
        layout.swap(a, b);
    }
    assert_eq!(layout.total_freq(), before);
    assert_valid_permutation(&layout);
}

#[test]
fn from_bytes_rejects_bad_input() {
    let corpus = common::test_corpus();

    assert!(Layout::from_bytes(b"abc", &corpus).is_err());

    // 'a' twice, 'b' missing
    let mut dup = ALPHABET.to_vec();
    dup[1] = b'a';
    assert!(Layout::from_bytes(&dup, &corpus).is_err());

    let mut alien = ALPHABET.to_vec();
    alien[0] = b'@';
    assert!(Layout::from_bytes(&alien, &corpus).is_err());
}

#[test]
fn known_layouts_are_valid_permutations() {
    let corpus = common::test_corpus();
    for known in KnownLayout::iter() {
        let layout = Layout::from_str(known.get_str(), &corpus)
            .unwrap_or_else(|e| panic!("{} is invalid: {}", known, e));
        assert_valid_permutation(&layout);
    }
}

#[test]
fn display_roundtrips() {
    let corpus = common::test_corpus();
    let mut rng = fastrand::Rng::with_seed(13);
    let layout = Layout::random(&corpus, &mut rng);

    let rendered = layout.to_string();
    let parsed = Layout::from_str(&rendered, &corpus).expect("rendered layout parses");
    assert_eq!(parsed, layout);
}
