mod heuristic;

pub use heuristic::NaiveHeuristic;
