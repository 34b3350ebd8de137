// ===== keysmith/src/corpus.rs =====
use crate::error::{KeysmithError, KsResult};
use crate::layout::ALPHABET;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct Trigram {
    pub keys: [u8; 3],
    pub freq: f64,
}

/// Letter/bigram/trigram frequency data, loaded once before a run.
/// Trigrams are held sorted by descending frequency so the sampler can
/// take a fixed-size prefix.
#[derive(Debug, Clone)]
pub struct Corpus {
    letters: [f64; 256],
    total_letters: f64,
    bigrams: Vec<(u8, u8, f64)>,
    trigrams: Vec<Trigram>,
}

impl Corpus {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KsResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses tab-separated `ngram<TAB>count` rows. Symbols outside the
    /// 30-key alphabet and malformed rows are skipped.
    pub fn from_reader<R: Read>(reader: R) -> KsResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .from_reader(reader);

        let mut letters = [0.0f64; 256];
        let mut bigrams = Vec::new();
        let mut trigrams = Vec::new();
        let mut lines_read = 0;

        for result in rdr.records() {
            lines_read += 1;
            let Ok(rec) = result else { continue };
            if rec.len() < 2 {
                continue;
            }

            let s_raw = rec[0].trim();
            if s_raw.is_empty() {
                continue;
            }
            let s = s_raw.to_ascii_lowercase();

            let count: f64 = match rec[1].trim().parse() {
                Ok(v) => v,
                Err(_) => continue,
            };

            let bytes = s.as_bytes();
            if !bytes.iter().all(|b| ALPHABET.contains(b)) {
                continue;
            }

            match bytes.len() {
                1 => letters[bytes[0] as usize] += count,
                2 => bigrams.push((bytes[0], bytes[1], count)),
                3 => trigrams.push(Trigram {
                    keys: [bytes[0], bytes[1], bytes[2]],
                    freq: count,
                }),
                _ => {}
            }
        }

        debug!(
            "Scanned {} corpus lines: {} bigrams, {} trigrams",
            lines_read,
            bigrams.len(),
            trigrams.len()
        );

        let total_letters: f64 = letters.iter().sum();
        if total_letters <= 0.0 {
            return Err(KeysmithError::Validation(
                "corpus contains no letter frequencies".to_string(),
            ));
        }

        trigrams.sort_by(|a, b| b.freq.total_cmp(&a.freq));

        Ok(Corpus {
            letters,
            total_letters,
            bigrams,
            trigrams,
        })
    }

    #[inline]
    pub fn letter_freq(&self, sym: u8) -> f64 {
        self.letters[sym as usize]
    }

    pub fn total_letter_freq(&self) -> f64 {
        self.total_letters
    }

    pub fn bigrams(&self) -> &[(u8, u8, f64)] {
        &self.bigrams
    }

    pub fn trigram_count(&self) -> usize {
        self.trigrams.len()
    }

    /// The `n` most frequent trigrams (all of them if `n` is larger than
    /// the corpus).
    pub fn trigrams_top(&self, n: usize) -> &[Trigram] {
        &self.trigrams[..n.min(self.trigrams.len())]
    }
}
