use std::fmt;
use colored::Colorize;

use super::{
    board::{Board, Cell},
    game::{Difficulty, GameState, Outcome, WinCause},
    loc::Loc,
    side::Side,
};

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        write!(f, "{}", BoardView { board: &self.board, shield: self.locked_cell })?;
        writeln!(f)?;

        for side in Side::all() {
            let player = self.player(side);
            write!(f, "{}: beads {} captured {}",
                paint(side, side.name()),
                player.beads,
                player.captured)?;

            match player.budget {
                Some(budget) => writeln!(f, " moves left {}", budget)?,
                None => writeln!(f)?,
            }
        }

        writeln!(f, "Difficulty: {}", self.difficulty)?;
        writeln!(f, "Idle moves: {}", self.idle_moves)?;

        match (self.outcome, self.side_to_move()) {
            (Some(outcome), _) => writeln!(f, "Result: {}", outcome)?,
            (None, Some(side)) => writeln!(f, "To move: {}", paint(side, side.name()))?,
            (None, None) => {}
        }

        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", BoardView { board: self, shield: None })
    }
}

/// Board diagram with the shielded statue bracketed
struct BoardView<'a> {
    board: &'a Board,
    shield: Option<Loc>,
}

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size() as i32;

        write!(f, "    ")?;
        for col in 0..size {
            write!(f, "{:^3}", col)?;
        }
        writeln!(f)?;

        write!(f, "   ")?;
        writeln!(f, "{}", "─".repeat(3 * size as usize + 1))?;

        for row in 0..size {
            write!(f, "{:2} │", row)?;

            for col in 0..size {
                let loc = Loc::new(row, col);
                let cell = self.board.get(loc).unwrap_or_default();
                let (open, close) = if self.shield == Some(loc) { ('[', ']') } else { (' ', ' ') };
                write!(f, "{}{}{}", open, cell, close)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Empty => write!(f, "·"),
            Cell::Statue(side) | Cell::Bead(side) => {
                let symbol = self.to_fen_char().unwrap_or('?').to_string();
                write!(f, "{}", paint(*side, &symbol))
            }
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win { winner, cause } => write!(f, "{} wins by {}", winner, cause),
        }
    }
}

impl fmt::Display for WinCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            WinCause::Capture => "capture",
            WinCause::BeadsExhausted => "placing every bead",
            WinCause::ThreeInARow => "three in a row",
            WinCause::Immobilized => "immobilization",
            WinCause::Timeout => "timeout",
        };
        write!(f, "{}", text)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn paint(side: Side, text: &str) -> colored::ColoredString {
    match side {
        Side::Red => text.bright_red(),
        Side::Blue => text.bright_blue(),
    }
}
