//! Move application: captures, bead placement and game end detection

use super::{
    board::Cell,
    game::{GameState, Outcome, WinCause, IDLE_MOVES_LIMIT},
    loc::{Loc, STEPS},
    move_gen::has_legal_moves,
    player::CAPTURE_LIMIT,
    side::Side,
};

/// Result of [`apply_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// No movable statue on the source cell, or the game is over
    NotApplicable,
    Applied {
        beads_placed: Vec<Loc>,
        state: GameState,
    },
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    pub fn into_state(self) -> Option<GameState> {
        match self {
            MoveOutcome::Applied { state, .. } => Some(state),
            MoveOutcome::NotApplicable => None,
        }
    }
}

/// Move the active player's statue from `from` to `to` and resolve the
/// consequences. The destination is assumed to be legal.
pub fn apply_move(state: &GameState, from: Loc, to: Loc) -> MoveOutcome {
    if state.is_game_over() {
        return MoveOutcome::NotApplicable;
    }

    let Some(side) = state.side_to_move() else {
        return MoveOutcome::NotApplicable;
    };

    if state.board.get(from) != Some(Cell::Statue(side))
        || state.players[side].locked_statue == Some(from)
    {
        return MoveOutcome::NotApplicable;
    }

    let enemy = !side;
    let mut next = state.clone();

    let captured = next.board.get(to) == Some(Cell::Statue(enemy));
    if captured {
        let mover = &mut next.players[side];
        mover.captured += 1;

        if mover.captured >= CAPTURE_LIMIT {
            next.outcome = Some(Outcome::Win { winner: side, cause: WinCause::Capture });
        }
    }

    debug_assert!(captured || next.board.is_empty_at(to), "{to} is not a legal landing cell");

    next.board.clear(from);
    next.board.set(to, Cell::Statue(side));
    next.locked_cell = Some(to);

    let locks_first_statue = next.difficulty.locks_first_statue();
    let mover = &mut next.players[side];
    mover.locked_statue = (locks_first_statue && mover.moves == 0).then_some(to);
    mover.moves += 1;

    if let Some(budget) = mover.budget.as_mut() {
        *budget = budget.saturating_sub(1);
    }

    let beads_placed = place_beads(&mut next, side, to);

    if next.outcome.is_none() && !has_legal_moves(&next, enemy) {
        next.outcome = Some(Outcome::Win { winner: side, cause: WinCause::Immobilized });
    }

    if captured || !beads_placed.is_empty() {
        next.idle_moves = 0;
    } else if next.difficulty.tracks_idle_moves() {
        next.idle_moves += 1;

        if next.idle_moves >= IDLE_MOVES_LIMIT {
            next.outcome = Some(Outcome::Draw);
        }
    }

    if next.outcome.is_none() && next.players[enemy].out_of_moves() {
        next.outcome = Some(Outcome::Win { winner: side, cause: WinCause::Timeout });
    }

    if next.is_game_over() {
        for player in next.players.iter_mut() {
            player.active = false;
        }
    } else {
        next.players[side].active = false;
        next.players[enemy].active = true;
    }

    MoveOutcome::Applied { beads_placed, state: next }
}

/// Drop a bead behind every enemy statue adjacent to `landing`
fn place_beads(state: &mut GameState, side: Side, landing: Loc) -> Vec<Loc> {
    let mut placed = Vec::new();

    for step in STEPS.iter() {
        if state.players[side].beads == 0 {
            break;
        }

        let adjacent = &landing + step;
        let beyond = &landing + &step.scale(2);

        if state.board.get(adjacent) != Some(Cell::Statue(!side))
            || !state.board.is_empty_at(beyond)
        {
            continue;
        }

        state.board.place(beyond, Cell::Bead(side));
        state.players[side].beads -= 1;
        placed.push(beyond);

        if state.outcome.is_some() {
            continue;
        }

        if state.players[side].beads == 0 {
            state.outcome = Some(Outcome::Win { winner: side, cause: WinCause::BeadsExhausted });
        } else if state.board.has_bead_line(side) {
            state.outcome = Some(Outcome::Win { winner: side, cause: WinCause::ThreeInARow });
        }
    }

    placed
}
