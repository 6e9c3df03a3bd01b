//! Legal move generation

use super::{
    action::Move,
    board::Cell,
    game::GameState,
    loc::Loc,
    side::Side,
};

/// Whether `side` may move the statue standing on `loc`
fn can_move_statue(state: &GameState, side: Side, loc: Loc) -> bool {
    state.board.get(loc) == Some(Cell::Statue(side))
        && state.players[side].locked_statue != Some(loc)
}

/// Whether a statue of `side` may land on `to`
fn can_land(state: &GameState, side: Side, to: Loc) -> bool {
    match state.board.get(to) {
        Some(Cell::Empty) => true,
        Some(Cell::Statue(owner)) => owner != side && state.locked_cell != Some(to),
        Some(Cell::Bead(_)) | None => false,
    }
}

/// Destinations of the statue on `loc` for `side`, ignoring whose turn it is
pub fn statue_moves(state: &GameState, side: Side, loc: Loc) -> Vec<Loc> {
    if !can_move_statue(state, side, loc) {
        return Vec::new();
    }

    loc.knight_targets(state.board.size())
        .filter(|to| can_land(state, side, *to))
        .collect()
}

/// Legal destinations for the piece on `loc`, or `None` if the active player
/// has no movable statue there
pub fn possible_moves(state: &GameState, loc: Loc) -> Option<Vec<Loc>> {
    let side = state.side_to_move()?;

    if !can_move_statue(state, side, loc) {
        return None;
    }

    Some(statue_moves(state, side, loc))
}

/// Every legal move of `side`, statues scanned row by row
pub fn legal_moves(state: &GameState, side: Side) -> Vec<Move> {
    state.board.statues(side)
        .flat_map(|from| {
            statue_moves(state, side, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

pub fn has_legal_moves(state: &GameState, side: Side) -> bool {
    state.board.statues(side)
        .any(|from| {
            can_move_statue(state, side, from)
                && from.knight_targets(state.board.size()).any(|to| can_land(state, side, to))
        })
}

/// Validate a move request from the input layer
pub fn is_legal(state: &GameState, mv: &Move) -> bool {
    possible_moves(state, mv.from)
        .is_some_and(|moves| moves.contains(&mv.to))
}

/// Whether the statue on `loc` can be taken by one enemy move
pub fn is_under_attack(state: &GameState, loc: Loc) -> bool {
    let Some(side) = state.board.get(loc).and_then(|cell| cell.statue_side()) else {
        return false;
    };

    if state.locked_cell == Some(loc) {
        return false;
    }

    let enemy = !side;

    // knight steps are symmetric, so attackers sit on our own targets
    loc.knight_targets(state.board.size())
        .any(|from| can_move_statue(state, enemy, from))
}
