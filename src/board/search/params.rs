#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::super::{EvalWeights, Legality};

/// Fixed-depth search settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies to look ahead. Zero returns the static evaluation only.
    pub depth: u32,
    pub legality: Legality,
    pub weights: EvalWeights,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..SearchConfig::default()
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 3,
            legality: Legality::Strict,
            weights: EvalWeights::default(),
        }
    }
}
