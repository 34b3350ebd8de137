// ===== keysmith/src/layout.rs =====
use crate::corpus::Corpus;
use crate::error::{KeysmithError, KsResult};
use crate::geometry::{Pos, COLS, KEY_COUNT, ROWS};
use fastrand::Rng;
use std::fmt;

/// The 30 symbols every layout is a permutation of.
pub const ALPHABET: &[u8; KEY_COUNT] = b"abcdefghijklmnopqrstuvwxyz,./'";

const NO_POS: u8 = 255;

/// One candidate assignment of symbols to keys: the grid, a byte -> slot
/// reverse map kept strictly consistent with it, and the aggregate corpus
/// frequency of the placed symbols (constant across swaps, since every
/// layout is a permutation of the same alphabet).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    keys: [[u8; COLS]; ROWS],
    pos_map: [u8; 256],
    total_freq: f64,
}

impl Layout {
    /// Uniformly random permutation of the alphabet over the grid.
    pub fn random(corpus: &Corpus, rng: &mut Rng) -> Self {
        let mut pool: Vec<u8> = ALPHABET.to_vec();
        let mut keys = [[0u8; COLS]; ROWS];
        let mut total = 0.0;

        for row in keys.iter_mut() {
            for cell in row.iter_mut() {
                let sym = pool.swap_remove(rng.usize(0..pool.len()));
                *cell = sym;
                total += corpus.letter_freq(sym);
            }
        }

        let mut layout = Layout {
            keys,
            pos_map: [NO_POS; 256],
            total_freq: total,
        };
        layout.rebuild_pos_map();
        layout
    }

    /// Builds a layout from a 30-byte string, row-major. Fails unless the
    /// bytes are exactly a permutation of the alphabet.
    pub fn from_bytes(bytes: &[u8], corpus: &Corpus) -> KsResult<Self> {
        if bytes.len() != KEY_COUNT {
            return Err(KeysmithError::Validation(format!(
                "layout must be {} symbols, got {}",
                KEY_COUNT,
                bytes.len()
            )));
        }

        let mut seen = [false; 256];
        for &b in bytes {
            if !ALPHABET.contains(&b) {
                return Err(KeysmithError::Validation(format!(
                    "symbol '{}' is not in the layout alphabet",
                    b as char
                )));
            }
            if seen[b as usize] {
                return Err(KeysmithError::Validation(format!(
                    "symbol '{}' appears more than once",
                    b as char
                )));
            }
            seen[b as usize] = true;
        }

        let mut keys = [[0u8; COLS]; ROWS];
        let mut total = 0.0;
        for (i, &b) in bytes.iter().enumerate() {
            keys[i / COLS][i % COLS] = b;
            total += corpus.letter_freq(b);
        }

        let mut layout = Layout {
            keys,
            pos_map: [NO_POS; 256],
            total_freq: total,
        };
        layout.rebuild_pos_map();
        Ok(layout)
    }

    pub fn from_str(s: &str, corpus: &Corpus) -> KsResult<Self> {
        Self::from_bytes(s.to_lowercase().as_bytes(), corpus)
    }

    fn rebuild_pos_map(&mut self) {
        self.pos_map = [NO_POS; 256];
        for row in 0..ROWS {
            for col in 0..COLS {
                self.pos_map[self.keys[row][col] as usize] = Pos::new(row, col).flat() as u8;
            }
        }
    }

    #[inline]
    pub fn key_at(&self, p: Pos) -> u8 {
        self.keys[p.row][p.col]
    }

    #[inline]
    pub fn pos_of(&self, sym: u8) -> Option<Pos> {
        let v = self.pos_map[sym as usize];
        if v == NO_POS {
            None
        } else {
            Some(Pos::from_flat(v as usize))
        }
    }

    pub fn rows(&self) -> &[[u8; COLS]; ROWS] {
        &self.keys
    }

    pub fn total_freq(&self) -> f64 {
        self.total_freq
    }

    /// Exchange the symbols at `a` and `b` and patch the reverse map.
    /// Self-inverse: applying the same pair twice restores the layout.
    #[inline]
    pub fn swap(&mut self, a: Pos, b: Pos) {
        let sa = self.keys[a.row][a.col];
        let sb = self.keys[b.row][b.col];
        self.keys[a.row][a.col] = sb;
        self.keys[b.row][b.col] = sa;
        self.pos_map[sb as usize] = a.flat() as u8;
        self.pos_map[sa as usize] = b.flat() as u8;
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.keys {
            for &b in row {
                write!(f, "{}", b as char)?;
            }
        }
        Ok(())
    }
}
