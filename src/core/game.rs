//! Game configuration and state

use super::{
    board::{Board, Cell},
    convert::{FromIndex, ToIndex},
    loc::{Loc, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE},
    player::Player,
    side::{Side, SideArray},
};

use anyhow::{anyhow, bail, ensure, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use std::str::FromStr;

/// Consecutive moves without capture or bead that end the game in a draw
pub const IDLE_MOVES_LIMIT: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive)]
pub enum Difficulty {
    #[default]
    Easy = 1,
    Normal = 2,
    Hard = 3,
}

impl Difficulty {
    pub fn all() -> [Difficulty; 3] {
        [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Plies searched by the computer player
    pub fn depth(self) -> u32 {
        match self {
            Difficulty::Easy | Difficulty::Normal => 1,
            Difficulty::Hard => 3,
        }
    }

    /// Whether idle moves count toward a draw
    pub fn tracks_idle_moves(self) -> bool {
        self != Difficulty::Easy
    }

    /// Whether a player's first-moved statue is held for a round
    pub fn locks_first_statue(self) -> bool {
        self == Difficulty::Hard
    }
}

impl FromIndex for Difficulty {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid difficulty level: {}", idx))
    }
}

impl ToIndex for Difficulty {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid difficulty value"))
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(idx) = s.parse::<usize>() {
            return Difficulty::from_index(idx);
        }

        Difficulty::all()
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow!("Unknown difficulty: {}", s))
    }
}

/// How a game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinCause {
    /// Third enemy statue captured
    Capture,
    /// Winner placed its last bead
    BeadsExhausted,
    /// Three of the winner's beads in a line
    ThreeInARow,
    /// Loser had no legal move left
    Immobilized,
    /// Loser used up its move budget
    Timeout,
}

impl WinCause {
    pub fn tag(self) -> &'static str {
        match self {
            WinCause::Capture => "capture",
            WinCause::BeadsExhausted => "beads",
            WinCause::ThreeInARow => "line",
            WinCause::Immobilized => "immobile",
            WinCause::Timeout => "timeout",
        }
    }

    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(match tag {
            "capture" => WinCause::Capture,
            "beads" => WinCause::BeadsExhausted,
            "line" => WinCause::ThreeInARow,
            "immobile" => WinCause::Immobilized,
            "timeout" => WinCause::Timeout,
            _ => bail!("Unknown win cause: {}", tag),
        })
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win { winner: Side, cause: WinCause },
    /// Idle move limit reached
    Draw,
}

impl Outcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win { winner, .. } => Some(*winner),
            Outcome::Draw => None,
        }
    }
}

/// Settings chosen before a game starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub first_side: Side,
    pub difficulty: Difficulty,
    /// Side played by the computer, if any
    pub computer: Option<Side>,
    /// Report legal moves after every move
    pub show_hints: bool,
    /// Moves each side may make before it loses on time, unlimited if `None`
    pub move_budget: Option<u32>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size),
            "Board size must be between {} and {}, got {}",
            MIN_BOARD_SIZE,
            MAX_BOARD_SIZE,
            self.board_size
        );
        ensure!(self.move_budget != Some(0), "Move budget must be positive");
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_side: Side::Red,
            difficulty: Difficulty::default(),
            computer: Some(Side::Red),
            show_hints: true,
            move_budget: None,
        }
    }
}

/// Snapshot of one game position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub players: SideArray<Player>,
    /// Most recently moved statue, which cannot be captured
    pub locked_cell: Option<Loc>,
    /// Moves since the last capture or bead placement
    pub idle_moves: u32,
    pub outcome: Option<Outcome>,
    pub difficulty: Difficulty,
}

impl GameState {
    /// Start position: each side's statues fill a 2x2 block in opposite corners
    pub fn new(config: &GameConfig) -> Self {
        let size = config.board_size as i32;
        let mut board = Board::new(config.board_size);

        for row in 0..2 {
            for col in 0..2 {
                board.place(Loc::new(row, col), Cell::Statue(Side::Red));
                board.place(Loc::new(size - 1 - row, size - 1 - col), Cell::Statue(Side::Blue));
            }
        }

        let mut players = SideArray::splat(Player {
            budget: config.move_budget,
            ..Player::new(false)
        });
        players[config.first_side].active = true;

        Self {
            board,
            players,
            locked_cell: None,
            idle_moves: 0,
            outcome: None,
            difficulty: config.difficulty,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// The active player, `None` once the game is over
    pub fn side_to_move(&self) -> Option<Side> {
        Side::all().into_iter().find(|side| self.players[*side].active)
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side]
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == Some(Outcome::Draw)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(&GameConfig::default());

        let red: Vec<_> = state.board.statues(Side::Red).collect();
        let blue: Vec<_> = state.board.statues(Side::Blue).collect();

        assert_eq!(red, vec![Loc::new(0, 0), Loc::new(0, 1), Loc::new(1, 0), Loc::new(1, 1)]);
        assert_eq!(blue, vec![Loc::new(6, 6), Loc::new(6, 7), Loc::new(7, 6), Loc::new(7, 7)]);
        assert_eq!(state.side_to_move(), Some(Side::Red));
        assert!(!state.is_game_over());
        assert_eq!(state.player(Side::Blue).beads, crate::core::BEADS_COUNT);
        assert_eq!(state.player(Side::Red).budget, None);
    }

    #[test]
    fn test_move_budget_given_to_both_sides() {
        let state = GameState::new(&GameConfig {
            move_budget: Some(12),
            ..GameConfig::default()
        });

        for side in Side::all() {
            assert_eq!(state.player(side).budget, Some(12));
        }
    }

    #[test_case("timeout", WinCause::Timeout)]
    #[test_case("line", WinCause::ThreeInARow)]
    fn test_win_cause_tags(tag: &str, cause: WinCause) {
        assert_eq!(WinCause::from_tag(tag).unwrap(), cause);
        assert_eq!(cause.tag(), tag);
    }

    #[test]
    fn test_first_side_configurable() {
        let config = GameConfig {
            board_size: 7,
            first_side: Side::Blue,
            ..GameConfig::default()
        };
        let state = GameState::new(&config);

        assert_eq!(state.side_to_move(), Some(Side::Blue));
        assert!(!state.player(Side::Red).active);
        assert_eq!(state.board.get(Loc::new(6, 6)), Some(Cell::Statue(Side::Blue)));
    }

    #[test_case("1", Difficulty::Easy)]
    #[test_case("normal", Difficulty::Normal)]
    #[test_case("Hard", Difficulty::Hard)]
    fn test_parse_difficulty(input: &str, expected: Difficulty) {
        assert_eq!(input.parse::<Difficulty>().unwrap(), expected);
    }

    #[test]
    fn test_reject_bad_config() {
        assert!("4".parse::<Difficulty>().is_err());

        let config = GameConfig {
            board_size: 40,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(GameConfig::default().validate().is_ok());

        let config = GameConfig {
            move_budget: Some(0),
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
