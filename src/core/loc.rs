use std::{
    fmt::Display, ops::{Add, Sub}, str::FromStr
};
use anyhow::Context;
use lazy_static::lazy_static;

pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 12;
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// A cell on the game board, row grows downward and col rightward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self, size: usize) -> bool {
        self.row >= 0 && self.row < size as i32 &&
        self.col >= 0 && self.col < size as i32
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            row: (index / size) as i32,
            col: (index % size) as i32,
        }
    }

    pub fn index(&self, size: usize) -> usize {
        (self.row as usize) * size + (self.col as usize)
    }

    /// Knight-step targets that lie on a board of the given size
    pub fn knight_targets(&self, size: usize) -> impl Iterator<Item = Loc> + '_ {
        KNIGHT_DELTAS.iter()
            .map(move |delta| self + delta)
            .filter(move |loc| loc.in_bounds(size))
    }

    pub fn is_knight_step(&self, other: &Loc) -> bool {
        let delta = other - self;
        KNIGHT_DELTAS.contains(&delta)
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',')
            .with_context(|| format!("Invalid loc {s}"))?;

        Ok(Loc {
            row: row.trim().parse().with_context(|| format!("Invalid row in {s}"))?,
            col: col.trim().parse().with_context(|| format!("Invalid col in {s}"))?,
        })
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocDelta {
    pub dr: i32,
    pub dc: i32,
}

impl LocDelta {
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }

    pub const fn scale(&self, k: i32) -> Self {
        Self { dr: self.dr * k, dc: self.dc * k }
    }
}

impl Add<&LocDelta> for &Loc {
    type Output = Loc;

    fn add(self, other: &LocDelta) -> Self::Output {
        Loc {
            row: self.row + other.dr,
            col: self.col + other.dc,
        }
    }
}

impl Sub<&Loc> for &Loc {
    type Output = LocDelta;

    fn sub(self, other: &Loc) -> Self::Output {
        LocDelta {
            dr: self.row - other.row,
            dc: self.col - other.col,
        }
    }
}

/// Knight steps in move generation order
pub const KNIGHT_DELTAS: [LocDelta; 8] = [
    LocDelta::new(-2, -1),
    LocDelta::new(-2, 1),
    LocDelta::new(1, -2),
    LocDelta::new(1, 2),
    LocDelta::new(2, -1),
    LocDelta::new(2, 1),
    LocDelta::new(-1, -2),
    LocDelta::new(-1, 2),
];

/// The eight unit steps, orthogonal first
pub const STEPS: [LocDelta; 8] = [
    LocDelta::new(-1, 0),
    LocDelta::new(1, 0),
    LocDelta::new(0, -1),
    LocDelta::new(0, 1),
    LocDelta::new(-1, -1),
    LocDelta::new(-1, 1),
    LocDelta::new(1, -1),
    LocDelta::new(1, 1),
];

/// Forward directions of a line: east, south, south-east, south-west
const LINE_STEPS: [LocDelta; 4] = [
    LocDelta::new(0, 1),
    LocDelta::new(1, 0),
    LocDelta::new(1, 1),
    LocDelta::new(1, -1),
];

pub type Line = [Loc; 3];

lazy_static!(
    /// Every run of three cells in a straight line, indexed by board size
    pub static ref LINES: Vec<Vec<Line>> = {
        (0..=MAX_BOARD_SIZE)
            .map(|size| {
                let mut lines = Vec::new();

                for index in 0..size * size {
                    let start = Loc::from_index(index, size);

                    for step in LINE_STEPS.iter() {
                        let mid = &start + step;
                        let end = &start + &step.scale(2);

                        if end.in_bounds(size) {
                            lines.push([start, mid, end]);
                        }
                    }
                }

                lines
            })
            .collect()
    };
);
