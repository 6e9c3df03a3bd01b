pub mod naive;

mod traits;
pub use traits::*;

pub use naive::NaiveHeuristic;
