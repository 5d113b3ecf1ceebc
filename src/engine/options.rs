//! Runtime options of the engine, set through `setoption`

use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Whether the board is rendered with terminal colors
    pub color: bool,
    /// Whether the driver stops on the first failed command
    pub strict_mode: bool,
}

impl EngineOptions {
    pub fn new(color: bool, strict_mode: bool) -> Self {
        Self { color, strict_mode }
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "color" => {
                self.color = value
                    .parse()
                    .with_context(|| format!("Invalid value for color: {}", value))?;
            }
            "strictmode" => {
                self.strict_mode = value
                    .parse()
                    .with_context(|| format!("Invalid value for strictmode: {}", value))?;
            }
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            color: true,
            strict_mode: false,
        }
    }
}
