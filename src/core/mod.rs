//! Core game representations and rules

pub mod action;
pub mod board;
pub mod convert;
pub mod display;
pub mod fen;
pub mod game;
pub mod loc;
pub mod move_gen;
pub mod player;
pub mod rules;
pub mod side;

pub use action::{Move, MoveReport};
pub use board::{Board, Cell};
pub use convert::{FromIndex, ToIndex};
pub use game::{Difficulty, GameConfig, GameState, Outcome, WinCause, IDLE_MOVES_LIMIT};
pub use loc::{Loc, LocDelta};
pub use move_gen::{has_legal_moves, is_legal, is_under_attack, legal_moves, possible_moves};
pub use player::{Player, BEADS_COUNT, CAPTURE_LIMIT};
pub use rules::{apply_move, MoveOutcome};
pub use side::{Side, SideArray};
