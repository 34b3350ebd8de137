// ===== keysmith/src/geometry.rs =====
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

pub const ROWS: usize = 3;
pub const COLS: usize = 10;
pub const KEY_COUNT: usize = ROWS * COLS;

/// One physical key on the 3x10 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }

    #[inline]
    pub fn flat(self) -> usize {
        self.row * COLS + self.col
    }

    #[inline]
    pub fn from_flat(idx: usize) -> Self {
        Pos {
            row: idx / COLS,
            col: idx % COLS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hand {
    Left,
    Right,
}

/// Fingers in slot order, left pinky through right pinky. Thumbs never
/// touch the 3x10 block, so they are not modelled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

pub const FINGER_COUNT: usize = 8;

impl Finger {
    pub fn hand(self) -> Hand {
        match self {
            Finger::LeftPinky | Finger::LeftRing | Finger::LeftMiddle | Finger::LeftIndex => {
                Hand::Left
            }
            _ => Hand::Right,
        }
    }

    /// Thumb-relative numbering: 1=Index .. 4=Pinky. A decreasing sequence
    /// within one hand is an inward roll.
    pub fn roll_order(self) -> i8 {
        match self {
            Finger::LeftIndex | Finger::RightIndex => 1,
            Finger::LeftMiddle | Finger::RightMiddle => 2,
            Finger::LeftRing | Finger::RightRing => 3,
            Finger::LeftPinky | Finger::RightPinky => 4,
        }
    }

    pub fn is_index(self) -> bool {
        matches!(self, Finger::LeftIndex | Finger::RightIndex)
    }
}

/// Physical metadata for the fixed 3x10 grid: finger assignment, key
/// coordinates (row-staggered like the physical board it models), and the
/// home position of each finger. Shared read-only by every worker.
#[derive(Debug, Clone)]
pub struct Geometry {
    fingers: [Finger; KEY_COUNT],
    coords: [(f64, f64); KEY_COUNT],
    home: [Pos; FINGER_COUNT],
}

impl Geometry {
    pub fn standard() -> Self {
        const ROW_STAGGER: [f64; ROWS] = [0.0, 0.2, 0.5];
        const COL_FINGERS: [Finger; COLS] = [
            Finger::LeftPinky,
            Finger::LeftRing,
            Finger::LeftMiddle,
            Finger::LeftIndex,
            Finger::LeftIndex,
            Finger::RightIndex,
            Finger::RightIndex,
            Finger::RightMiddle,
            Finger::RightRing,
            Finger::RightPinky,
        ];

        let mut fingers = [Finger::LeftPinky; KEY_COUNT];
        let mut coords = [(0.0, 0.0); KEY_COUNT];
        for row in 0..ROWS {
            for col in 0..COLS {
                let i = row * COLS + col;
                fingers[i] = COL_FINGERS[col];
                coords[i] = (col as f64 + ROW_STAGGER[row], row as f64);
            }
        }

        // Home row, index fingers on the inner non-stretch columns.
        let home = [
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(1, 3),
            Pos::new(1, 6),
            Pos::new(1, 7),
            Pos::new(1, 8),
            Pos::new(1, 9),
        ];

        Geometry {
            fingers,
            coords,
            home,
        }
    }

    #[inline]
    pub fn finger(&self, p: Pos) -> Finger {
        self.fingers[p.flat()]
    }

    #[inline]
    pub fn hand(&self, p: Pos) -> Hand {
        self.finger(p).hand()
    }

    pub fn home(&self, f: Finger) -> Pos {
        self.home[f as usize]
    }

    /// Euclidean travel distance between two keys, in key-width units.
    pub fn distance(&self, a: Pos, b: Pos) -> f64 {
        let (ax, ay) = self.coords[a.flat()];
        let (bx, by) = self.coords[b.flat()];
        ((ax - bx).powi(2) + (ay - by).powi(2)).sqrt()
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::standard()
    }
}
