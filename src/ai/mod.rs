//! Computer player: fixed-depth minimax with randomized tie breaking
pub mod search;
pub mod tree;

pub use search::{choose_move, SearchResult};
pub use tree::DecisionTree;
