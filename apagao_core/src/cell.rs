use serde::{Deserialize, Serialize};

/// Binary display state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightState {
    Off,
    On,
}

impl LightState {
    /// The opposite state. Toggling twice is a no-op.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Off => Self::On,
            Self::On => Self::Off,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::Off
    }
}
