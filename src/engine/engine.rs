use crate::ai::SearchResult;
use crate::core::{
    apply_move, legal_moves, possible_moves, GameConfig, GameState, Loc, Move, MoveOutcome,
    MoveReport,
};
use crate::heuristics::NaiveHeuristic;
use crate::utils::{make_rng, seeded_rng};

use super::options::EngineOptions;
use super::search::{search, SearchOptions};

use anyhow::{bail, Context, Result};
use log::{info, warn};
use rand::rngs::StdRng;

/// Engine owns one game and the computer player that takes part in it
pub struct Engine {
    pub config: GameConfig,
    pub state: GameState,
    pub options: EngineOptions,
    heuristic: NaiveHeuristic,
    rng: StdRng,
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        let config = GameConfig::default();

        Self {
            state: GameState::new(&config),
            config,
            options: EngineOptions::default(),
            heuristic: NaiveHeuristic,
            rng: make_rng(),
        }
    }

    pub fn with_config(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut engine = Self::new();
        engine.config = config;
        engine.new_game();
        Ok(engine)
    }

    /// Start over from the initial position of the current config
    pub fn new_game(&mut self) {
        self.state = GameState::new(&self.config);

        info!(
            "new game: {0}x{0} board, {1} difficulty, {2} moves first, computer plays {3}",
            self.config.board_size,
            self.config.difficulty,
            self.config.first_side,
            self.config.computer.map_or("nobody", |side| side.name()),
        );
    }

    pub fn set_position(&mut self, state: GameState) {
        self.config.board_size = state.board.size();
        self.config.difficulty = state.difficulty;
        self.state = state;
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Legal destinations of the statue on `loc`, empty if it cannot move
    pub fn hints(&self, loc: Loc) -> Vec<Loc> {
        possible_moves(&self.state, loc).unwrap_or_default()
    }

    /// Every movable statue of the side to move with its destinations
    pub fn all_hints(&self) -> Vec<(Loc, Vec<Loc>)> {
        let Some(side) = self.state.side_to_move() else {
            return Vec::new();
        };

        let mut hints: Vec<(Loc, Vec<Loc>)> = Vec::new();
        for mv in legal_moves(&self.state, side) {
            match hints.last_mut() {
                Some((from, targets)) if *from == mv.from => targets.push(mv.to),
                _ => hints.push((mv.from, vec![mv.to])),
            }
        }
        hints
    }

    /// Apply a move for the side to move, leaving the state untouched on error
    pub fn play_move(&mut self, mv: Move) -> Result<MoveReport> {
        let report = self.try_move(mv);

        if let Err(err) = &report {
            warn!("rejected move {}: {:#}", mv, err);
        }

        report
    }

    fn try_move(&mut self, mv: Move) -> Result<MoveReport> {
        if let Some(outcome) = self.state.outcome {
            bail!("game is over ({})", outcome);
        }

        let side = self.state.side_to_move().context("no side to move")?;
        let targets = possible_moves(&self.state, mv.from)
            .with_context(|| format!("no movable {} statue on {}", side, mv.from))?;

        if !targets.contains(&mv.to) {
            bail!("{} cannot move to {}", mv.from, mv.to);
        }

        let MoveOutcome::Applied { beads_placed, state } = apply_move(&self.state, mv.from, mv.to) else {
            bail!("move {} was not applicable", mv);
        };

        self.state = state;

        if let Some(outcome) = self.state.outcome {
            info!("game over: {}", outcome);
        }

        Ok(MoveReport {
            mv,
            beads_placed,
            shield: mv.to,
            outcome: self.state.outcome,
        })
    }

    /// Search the current position without playing
    pub fn go(&mut self, search_options: &SearchOptions) -> Option<SearchResult> {
        search(&self.state, search_options, &self.heuristic, &mut self.rng)
    }

    /// Search and play the chosen move
    pub fn play_computer(&mut self, search_options: &SearchOptions) -> Result<Option<MoveReport>> {
        match self.go(search_options) {
            Some(result) => self.play_move(result.best_move).map(Some),
            None => Ok(None),
        }
    }

    /// Whether the configured computer side is the side to move
    pub fn computer_to_move(&self) -> bool {
        self.config.computer.is_some()
            && self.config.computer == self.state.side_to_move()
    }

    /// Set a game or engine option. Game options apply from the next new game.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "boardsize" => {
                let config = GameConfig {
                    board_size: value.parse().context("boardsize must be an integer")?,
                    ..self.config.clone()
                };
                config.validate()?;
                self.config = config;
            }
            "movebudget" => {
                let config = GameConfig {
                    move_budget: match value {
                        "none" => None,
                        budget => Some(budget.parse().context("movebudget must be an integer or none")?),
                    },
                    ..self.config.clone()
                };
                config.validate()?;
                self.config = config;
            }
            "firstmove" => self.config.first_side = value.parse()?,
            "difficulty" => self.config.difficulty = value.parse()?,
            "computer" => {
                self.config.computer = match value {
                    "none" => None,
                    side => Some(side.parse()?),
                }
            }
            "hints" => self.config.show_hints = value.parse().context("hints must be true or false")?,
            _ => {
                self.options.set_option(name, value)?;

                if let ("seed", Some(seed)) = (name, self.options.seed) {
                    self.rng = seeded_rng(seed);
                }
            }
        }

        Ok(())
    }

    pub fn display(&self) {
        println!("{}", self.state);
    }

    pub fn get_fen(&self) -> Result<String> {
        self.state.to_fen()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, Side};

    fn mv(from: (i32, i32), to: (i32, i32)) -> Move {
        Move::new(from.into(), to.into())
    }

    #[test]
    fn test_play_move_report() {
        let mut engine = Engine::new();
        let report = engine.play_move(mv((1, 1), (3, 2))).unwrap();

        assert_eq!(report.shield, Loc::new(3, 2));
        assert!(report.beads_placed.is_empty());
        assert_eq!(report.outcome, None);
        assert_eq!(engine.state().side_to_move(), Some(Side::Blue));
        assert_eq!(engine.state().locked_cell, Some(Loc::new(3, 2)));
    }

    #[test]
    fn test_rejected_moves_leave_state_unchanged() {
        let mut engine = Engine::new();
        let before = engine.state().clone();

        assert!(engine.play_move(mv((4, 4), (6, 5))).is_err());
        assert!(engine.play_move(mv((7, 7), (5, 6))).is_err());
        assert!(engine.play_move(mv((1, 1), (2, 2))).is_err());
        assert_eq!(engine.state(), &before);

        let mut over = before.clone();
        over.outcome = Some(crate::core::Outcome::Draw);
        over.players[Side::Red].active = false;
        engine.set_position(over.clone());
        assert!(engine.play_move(mv((1, 1), (3, 2))).is_err());
        assert_eq!(engine.state(), &over);
    }

    #[test]
    fn test_hints() {
        let engine = Engine::new();
        assert_eq!(engine.hints(Loc::new(0, 0)), vec![Loc::new(1, 2), Loc::new(2, 1)]);
        assert!(engine.hints(Loc::new(7, 7)).is_empty());

        let hints = engine.all_hints();
        assert_eq!(hints.len(), 4);
        assert_eq!(hints[3], (Loc::new(1, 1), engine.hints(Loc::new(1, 1))));
    }

    #[test]
    fn test_options_apply_on_new_game() {
        let mut engine = Engine::new();
        engine.set_option("boardsize", "6").unwrap();
        engine.set_option("difficulty", "hard").unwrap();
        engine.set_option("firstmove", "blue").unwrap();
        engine.set_option("computer", "none").unwrap();

        assert_eq!(engine.state().board.size(), 8);

        engine.new_game();
        assert_eq!(engine.state().board.size(), 6);
        assert_eq!(engine.state().difficulty, Difficulty::Hard);
        assert_eq!(engine.state().side_to_move(), Some(Side::Blue));
        assert!(!engine.computer_to_move());

        assert!(engine.set_option("boardsize", "3").is_err());
        assert!(engine.set_option("computer", "green").is_err());
        assert!(engine.set_option("colour", "red").is_err());
        assert_eq!(engine.config.board_size, 6);
    }

    #[test]
    fn test_move_budget_option() {
        let mut engine = Engine::new();
        engine.set_option("computer", "none").unwrap();
        engine.set_option("movebudget", "1").unwrap();
        assert_eq!(engine.state().player(Side::Red).budget, None);

        engine.new_game();
        engine.play_move(mv((1, 1), (3, 2))).unwrap();
        let report = engine.play_move(mv((6, 6), (4, 5))).unwrap();

        assert_eq!(
            report.outcome,
            Some(crate::core::Outcome::Win { winner: Side::Blue, cause: crate::core::WinCause::Timeout })
        );
        assert!(engine.play_move(mv((0, 0), (2, 1))).is_err());

        assert!(engine.set_option("movebudget", "0").is_err());
        assert!(engine.set_option("movebudget", "many").is_err());
        engine.set_option("movebudget", "none").unwrap();
        assert_eq!(engine.config.move_budget, None);
    }

    #[test]
    fn test_computer_plays_its_side() {
        let mut engine = Engine::new();
        engine.set_option("seed", "9").unwrap();
        assert!(engine.computer_to_move());

        let report = engine.play_computer(&SearchOptions::default()).unwrap().unwrap();
        assert!(report.mv.from.row <= 1 && report.mv.from.col <= 1);
        assert_eq!(engine.state().side_to_move(), Some(Side::Blue));
        assert!(!engine.computer_to_move());
    }

    #[test]
    fn test_seed_makes_choice_reproducible() {
        let choose = || {
            let mut engine = Engine::new();
            engine.set_option("seed", "1234").unwrap();
            engine.go(&SearchOptions::default()).unwrap().best_move
        };

        assert_eq!(choose(), choose());
    }

    #[test]
    fn test_with_config_validates() {
        let config = GameConfig {
            board_size: 13,
            ..GameConfig::default()
        };
        assert!(Engine::with_config(config).is_err());

        let engine = Engine::with_config(GameConfig {
            board_size: 5,
            ..GameConfig::default()
        })
        .unwrap();
        assert_eq!(engine.state().board.size(), 5);
    }
}
