// ===== keysmith/src/reports/mod.rs =====
use crate::corpus::Corpus;
use crate::layout::{Layout, ALPHABET};
use crate::metrics::{balance, speed, trigrams};
use crate::scorer::Scorer;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use strum::IntoEnumIterator;

use crate::geometry::Finger;

pub fn print_layout_grid(name: &str, layout: &Layout) {
    println!("\nLayout: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in layout.rows() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&b| Cell::new((b as char).to_string()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

/// Full ergonomic dump: per-finger speeds, trigram ratios, index balance,
/// and the combined score.
pub fn print_analysis(layout: &Layout, scorer: &Scorer) {
    print_layout_grid("Generated", layout);

    let speeds = if scorer.dynamic {
        speed::dynamic_finger_speed(layout, &scorer.corpus, &scorer.geometry)
    } else {
        speed::finger_speed(layout, &scorer.corpus, &scorer.geometry)
    };

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.set_header(vec!["Finger", "Speed"]);
    for (finger, s) in Finger::iter().zip(speeds.iter()) {
        table.add_row(vec![
            Cell::new(finger.to_string()),
            Cell::new(format!("{:.2}", s)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);

    let tri = trigrams::fast_trigrams(
        layout,
        &scorer.corpus,
        &scorer.geometry,
        scorer.corpus.trigram_count(),
    );
    let total = tri[trigrams::TOTAL];
    if total > 0.0 {
        println!("Rolls:      {:.1}%", 100.0 * tri[trigrams::ROLL] / total);
        println!("Alternates: {:.1}%", 100.0 * tri[trigrams::ALTERNATE] / total);
        println!("Onehands:   {:.1}%", 100.0 * tri[trigrams::ONEHAND] / total);
        println!("Redirects:  {:.1}%", 100.0 * tri[trigrams::REDIRECT] / total);
    }

    let (left, right) = balance::index_usage(layout, &scorer.corpus, &scorer.geometry);
    println!(
        "Index usage: {:.1}% left / {:.1}% right (imbalance {:.1}%)",
        left * 100.0,
        right * 100.0,
        (right - left).abs() * 100.0
    );

    println!("Score: {:.2}", scorer.score(layout));
}

/// Terminal heatmap: each key shaded by its symbol's corpus frequency
/// relative to the most frequent symbol.
pub fn heatmap(layout: &Layout, corpus: &Corpus) {
    const SHADES: [char; 5] = ['·', '░', '▒', '▓', '█'];

    let max_freq = ALPHABET
        .iter()
        .map(|&b| corpus.letter_freq(b))
        .fold(0.0f64, f64::max);
    if max_freq <= 0.0 {
        return;
    }

    println!();
    for row in layout.rows() {
        let mut line = String::new();
        for &b in row {
            let intensity = corpus.letter_freq(b) / max_freq;
            let idx = ((intensity * (SHADES.len() - 1) as f64).round() as usize)
                .min(SHADES.len() - 1);
            line.push(SHADES[idx]);
            line.push(SHADES[idx]);
            line.push(' ');
        }
        println!("{}", line);
    }
    println!();
}
