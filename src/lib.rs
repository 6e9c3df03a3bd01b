//! Keibot - rules engine and computer opponent for the statue and bead game

pub mod ai;
pub mod core;
pub mod engine;
pub mod heuristics;
pub mod utils;

// Re-export commonly used items
pub use crate::core::{GameConfig, GameState};
pub use engine::Engine;
