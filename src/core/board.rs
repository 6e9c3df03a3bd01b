//! Board grid and cell contents

use super::{
    loc::{Loc, LINES, MAX_BOARD_SIZE},
    side::Side,
};

/// Content of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Statue(Side),
    Bead(Side),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn statue_side(&self) -> Option<Side> {
        match self {
            Cell::Statue(side) => Some(*side),
            _ => None,
        }
    }

    pub fn to_fen_char(&self) -> Option<char> {
        match self {
            Cell::Empty => None,
            Cell::Statue(Side::Red) => Some('R'),
            Cell::Statue(Side::Blue) => Some('B'),
            Cell::Bead(Side::Red) => Some('r'),
            Cell::Bead(Side::Blue) => Some('b'),
        }
    }

    pub fn from_fen_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Cell::Statue(Side::Red)),
            'B' => Some(Cell::Statue(Side::Blue)),
            'r' => Some(Cell::Bead(Side::Red)),
            'b' => Some(Cell::Bead(Side::Blue)),
            _ => None,
        }
    }
}

/// Square grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board
    pub fn new(size: usize) -> Self {
        debug_assert!(size <= MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at `loc`, or `None` off the board
    pub fn get(&self, loc: Loc) -> Option<Cell> {
        if loc.in_bounds(self.size) {
            Some(self.cells[loc.index(self.size)])
        } else {
            None
        }
    }

    pub fn is_empty_at(&self, loc: Loc) -> bool {
        self.get(loc) == Some(Cell::Empty)
    }

    pub fn set(&mut self, loc: Loc, cell: Cell) {
        debug_assert!(loc.in_bounds(self.size), "{loc} is off the board");
        let index = loc.index(self.size);
        self.cells[index] = cell;
    }

    /// Put a piece on an empty cell
    pub fn place(&mut self, loc: Loc, cell: Cell) {
        debug_assert!(self.is_empty_at(loc), "{loc} is occupied");
        self.set(loc, cell);
    }

    pub fn clear(&mut self, loc: Loc) -> Cell {
        let cell = self.get(loc).unwrap_or_default();
        self.set(loc, Cell::Empty);
        cell
    }

    pub fn cells(&self) -> impl Iterator<Item = (Loc, Cell)> + '_ {
        let size = self.size;
        self.cells.iter()
            .enumerate()
            .map(move |(index, cell)| (Loc::from_index(index, size), *cell))
    }

    /// Locations of `side`'s statues in row-major order
    pub fn statues(&self, side: Side) -> impl Iterator<Item = Loc> + '_ {
        self.cells()
            .filter(move |(_, cell)| *cell == Cell::Statue(side))
            .map(|(loc, _)| loc)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Whether three of `side`'s beads sit in one horizontal, vertical or diagonal line
    pub fn has_bead_line(&self, side: Side) -> bool {
        let bead = Cell::Bead(side);

        LINES[self.size].iter()
            .any(|line| line.iter().all(|loc| self.get(*loc) == Some(bead)))
    }
}
