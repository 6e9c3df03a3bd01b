//! Search for the best move

use crate::ai::tree::DecisionTree;
use crate::core::{GameState, Move};
use crate::heuristics::Heuristic;

use bumpalo::Bump;
use log::debug;
use rand::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    /// Minimax score of the root
    pub score: i32,
    /// Direct heuristic score of the chosen move's position
    pub evaluation: i32,
    /// Positions in the tree, root included
    pub nodes: usize,
    /// Moves the choice was drawn from
    pub candidates: usize,
}

/// Pick a move for the side to move by minimax over `max_depth` plies.
///
/// Among the root moves that reach the minimax score, those whose resulting
/// position scores highest on its own are kept and one is drawn at random.
/// Returns `None` when the game is over or there is no legal move. A depth
/// of 0 searches one ply, so a move is always found when one exists.
pub fn choose_move<H, R>(
    state: &GameState,
    max_depth: u32,
    heuristic: &H,
    rng: &mut R,
) -> Option<SearchResult>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    if state.is_game_over() {
        return None;
    }
    let side = state.side_to_move()?;
    let max_depth = max_depth.max(1);

    let arena = Bump::new();
    let mut tree = DecisionTree::build(state, max_depth, &arena);
    let score = tree.minimax(heuristic, side);

    let tied: Vec<(Move, i32)> = tree.children(tree.root())
        .iter()
        .filter(|child| child.score == score)
        .filter_map(|child| child.mv.map(|mv| (mv, heuristic.evaluate(&child.state, side))))
        .collect();

    let evaluation = tied.iter().map(|(_, eval)| *eval).max()?;
    let candidates: Vec<Move> = tied.iter()
        .filter(|(_, eval)| *eval == evaluation)
        .map(|(mv, _)| *mv)
        .collect();

    let best_move = candidates[rng.random_range(0..candidates.len())];

    debug!(
        "{} searched {} nodes to depth {}: score {}, {} tied, {} candidates, chose {}",
        side,
        tree.len(),
        max_depth,
        score,
        tied.len(),
        candidates.len(),
        best_move
    );

    Some(SearchResult {
        best_move,
        score,
        evaluation,
        nodes: tree.len(),
        candidates: candidates.len(),
    })
}
