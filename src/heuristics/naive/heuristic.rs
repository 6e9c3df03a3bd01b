use crate::{
    core::{is_under_attack, GameState, Outcome, Side},
    heuristics::{Heuristic, WIN_SCORE},
};

/// Material count: beads placed and statues captured, adjusted for
/// statues that can be taken next move
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveHeuristic;

impl NaiveHeuristic {
    /// Statues of `side` that the opponent could capture right now
    fn statues_under_attack(state: &GameState, side: Side) -> i32 {
        state.board.statues(side)
            .filter(|loc| is_under_attack(state, *loc))
            .count() as i32
    }
}

impl Heuristic for NaiveHeuristic {
    fn evaluate(&self, state: &GameState, side: Side) -> i32 {
        match state.outcome {
            // any decided game scores the same for both sides
            Some(Outcome::Win { .. }) => return WIN_SCORE,
            Some(Outcome::Draw) => return -WIN_SCORE,
            None => {}
        }

        let own = state.player(side);
        let enemy = state.player(!side);

        let material = (own.beads_placed() + own.captured) as i32
            - (enemy.beads_placed() + enemy.captured) as i32;

        material
            - Self::statues_under_attack(state, side)
            + Self::statues_under_attack(state, !side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Cell, Loc, WinCause};
    use test_case::test_case;

    #[test]
    fn test_start_position_is_even() {
        let state = GameState::default();
        assert_eq!(NaiveHeuristic.evaluate(&state, Side::Red), 0);
        assert_eq!(NaiveHeuristic.evaluate(&state, Side::Blue), 0);
    }

    #[test_case(Some(Outcome::Win { winner: Side::Red, cause: WinCause::Capture }), Side::Red, WIN_SCORE)]
    #[test_case(Some(Outcome::Win { winner: Side::Red, cause: WinCause::Capture }), Side::Blue, WIN_SCORE)]
    #[test_case(Some(Outcome::Win { winner: Side::Blue, cause: WinCause::Timeout }), Side::Red, WIN_SCORE)]
    #[test_case(Some(Outcome::Draw), Side::Red, -WIN_SCORE)]
    #[test_case(Some(Outcome::Draw), Side::Blue, -WIN_SCORE)]
    fn test_terminal_scores(outcome: Option<Outcome>, side: Side, expected: i32) {
        let mut state = GameState::default();
        state.outcome = outcome;
        assert_eq!(NaiveHeuristic.evaluate(&state, side), expected);
    }

    #[test]
    fn test_material_and_threats() {
        let mut state = GameState::default();
        state.board = Board::new(8);
        state.board.place(Loc::new(4, 4), Cell::Statue(Side::Red));
        state.board.place(Loc::new(6, 5), Cell::Statue(Side::Blue));
        state.board.place(Loc::new(0, 7), Cell::Statue(Side::Blue));
        state.players[Side::Red].beads -= 3;
        state.players[Side::Red].captured = 1;
        state.players[Side::Blue].beads -= 1;

        // 4,4 and 6,5 attack each other, 0,7 is safe
        assert_eq!(NaiveHeuristic.evaluate(&state, Side::Red), 4 - 1 - 1 + 1);
        assert_eq!(NaiveHeuristic.evaluate(&state, Side::Blue), 1 - 4 - 1 + 1);

        // the shielded statue cannot be taken
        state.locked_cell = Some(Loc::new(6, 5));
        assert_eq!(NaiveHeuristic.evaluate(&state, Side::Red), 4 - 1 - 1);
    }
}
