use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Produces a start position for the given board shape.
pub trait GridScrambler {
    fn scramble(self, config: GridConfig) -> LightGrid;
}

/// How far from solved a scrambled board starts.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScrambleIntensity {
    Gentle,
    Classic,
    Chaotic,
}

impl ScrambleIntensity {
    /// Press budget for a board of the given shape.
    pub fn press_budget(self, config: GridConfig) -> CellCount {
        let total = config.total_cells();
        match self {
            Self::Gentle => (total / 8).max(3),
            Self::Classic => (total / 2).max(5),
            Self::Chaotic => total,
        }
    }
}

impl Default for ScrambleIntensity {
    fn default() -> Self {
        Self::Classic
    }
}
