use crate::core::{GameState, Side};

/// Score awarded for a won position, and taken away for a lost or drawn one
pub const WIN_SCORE: i32 = 100;

/// Static evaluation of a position
pub trait Heuristic {
    /// Score `state` from `side`'s point of view; higher is better for `side`
    fn evaluate(&self, state: &GameState, side: Side) -> i32;
}

impl<H: Heuristic + ?Sized> Heuristic for &H {
    fn evaluate(&self, state: &GameState, side: Side) -> i32 {
        (**self).evaluate(state, side)
    }
}
