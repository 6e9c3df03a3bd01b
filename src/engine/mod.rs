mod engine;
mod options;
mod search;

pub use engine::Engine;
pub use options::EngineOptions;
pub use search::{search, SearchOptions};
