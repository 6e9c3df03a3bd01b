use crate::ai::{choose_move, SearchResult};
use crate::core::GameState;
use crate::heuristics::Heuristic;

use anyhow::{bail, ensure, Context};
use log::debug;
use rand::Rng;

use std::str::FromStr;
use std::time::Instant;

/// Options for a single search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Plies to search instead of the difficulty's depth
    pub depth: Option<u32>,
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "depth" if i + 1 < parts.len() => {
                    let depth = parts[i + 1].parse().context("invalid depth")?;
                    ensure!(depth > 0, "depth must be positive");
                    search_options.depth = Some(depth);
                    i += 1;
                }
                p => bail!("invalid go argument {}", p)
            }
            i += 1;
        }
        Ok(search_options)
    }
}

/// Run a search on `state`, falling back to the position's difficulty depth
pub fn search<H, R>(
    state: &GameState,
    search_options: &SearchOptions,
    heuristic: &H,
    rng: &mut R,
) -> Option<SearchResult>
where
    H: Heuristic + ?Sized,
    R: Rng + ?Sized,
{
    let start_time = Instant::now();
    let depth = search_options.depth.unwrap_or_else(|| state.difficulty.depth());

    let result = choose_move(state, depth, heuristic, rng);

    debug!("search at depth {} took {:.3}s", depth, start_time.elapsed().as_secs_f64());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_options() {
        assert_eq!("".parse::<SearchOptions>().unwrap(), SearchOptions::default());
        assert_eq!("depth 2".parse::<SearchOptions>().unwrap().depth, Some(2));
        assert!("depth".parse::<SearchOptions>().is_err());
        assert!("depth 0".parse::<SearchOptions>().is_err());
        assert!("movetime 100".parse::<SearchOptions>().is_err());
    }
}
