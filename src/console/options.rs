use crate::board::{Color, Legality, SearchConfig};

use super::CommandError;

/// Deepest search the console will start; deeper trees take minutes.
pub const MAX_DEPTH: u32 = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Side the engine answers for automatically, if any.
    pub engine_side: Option<Color>,
    pub depth: u32,
    pub legality: Legality,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        ConsoleOptions {
            engine_side: Some(Color::Black),
            depth: SearchConfig::default().depth,
            legality: Legality::Strict,
        }
    }
}

impl ConsoleOptions {
    /// Search settings for a move at `depth`, or at the configured depth.
    pub fn search_config(&self, depth: Option<u32>) -> SearchConfig {
        SearchConfig {
            depth: depth.unwrap_or(self.depth).min(MAX_DEPTH),
            legality: self.legality,
            ..SearchConfig::default()
        }
    }

    pub fn apply_set(&mut self, name: &str, value: &str) -> Result<(), CommandError> {
        let invalid = || CommandError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        };
        let normalized = value.trim().to_ascii_lowercase();

        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth = normalized.parse::<u32>().map_err(|_| invalid())?;
                self.depth = depth.min(MAX_DEPTH);
            }
            "engine" => {
                self.engine_side = match normalized.as_str() {
                    "white" | "w" => Some(Color::White),
                    "black" | "b" => Some(Color::Black),
                    "none" | "off" => None,
                    _ => return Err(invalid()),
                };
            }
            "legality" => {
                self.legality = match normalized.as_str() {
                    "strict" => Legality::Strict,
                    "reference" => Legality::Reference,
                    _ => return Err(invalid()),
                };
            }
            _ => {
                return Err(CommandError::UnknownOption {
                    name: name.to_string(),
                })
            }
        }
        Ok(())
    }
}
