//! Moves and move reports

use super::{game::Outcome, loc::Loc};

use anyhow::{ensure, Context, Result};
use std::{fmt::Display, str::FromStr};

/// A statue moving from one cell to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Loc,
    pub to: Loc,
}

impl Move {
    pub fn new(from: Loc, to: Loc) -> Self {
        Self { from, to }
    }

    pub fn from_args(args: &[&str]) -> Result<Self> {
        ensure!(args.len() == 2, "move needs a source and a destination");

        Ok(Self {
            from: args[0].parse().context("invalid move source")?,
            to: args[1].parse().context("invalid move destination")?,
        })
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let args: Vec<_> = s.split_whitespace().collect();
        Move::from_args(&args)
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// What a front end needs to redraw after a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub mv: Move,
    /// Beads placed by this move, in placement order
    pub beads_placed: Vec<Loc>,
    /// The shield now sits on the moved statue
    pub shield: Loc,
    pub outcome: Option<Outcome>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        let mv: Move = "1,0 3,1".parse().unwrap();
        assert_eq!(mv, Move::new(Loc::new(1, 0), Loc::new(3, 1)));
        assert_eq!(mv.to_string(), "1,0 3,1");
    }

    #[test]
    fn test_parse_move_errors() {
        assert!("1,0".parse::<Move>().is_err());
        assert!("1,0 3,1 4,4".parse::<Move>().is_err());
        assert!("1,0 x".parse::<Move>().is_err());
    }
}
