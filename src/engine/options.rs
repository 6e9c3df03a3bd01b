/// Configuration options for the engine
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, Default)]
pub struct EngineOptions {
    /// Whether protocol errors end the session
    pub strict_mode: bool,
    /// Fixed seed for the move chooser, if any
    pub seed: Option<u64>,
}

impl EngineOptions {
    /// Set an engine-level option; game options are handled by the engine
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "strictmode" => self.strict_mode = value.parse().context("strictmode must be true or false")?,
            "seed" => self.seed = Some(value.parse().context("seed must be an unsigned integer")?),
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}
