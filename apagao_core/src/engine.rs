use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    Ready,
    Active,
    Solved,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Gameplay wrapper around a [`LightGrid`]: counts moves, tracks the
/// Ready/Active/Solved state, and rejects presses once the board is solved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    grid: LightGrid,
    move_count: Saturating<u32>,
    state: EngineState,
}

impl PlayEngine {
    pub fn new(grid: LightGrid) -> Self {
        Self {
            grid,
            move_count: Saturating(0),
            state: Default::default(),
        }
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn grid(&self) -> &LightGrid {
        &self.grid
    }

    pub fn lit_count(&self) -> CellCount {
        self.grid.lit_count()
    }

    pub fn moves(&self) -> u32 {
        self.move_count.0
    }

    pub fn cell_at(&self, coords: Coord2) -> LightState {
        self.grid[coords]
    }

    /// Applies one press, counting the move and detecting the win.
    pub fn press(&mut self, coords: Coord2) -> Result<PressOutcome> {
        let coords = self.grid.validate_coords(coords)?;
        self.check_not_solved()?;

        self.grid.apply_press(coords)?;
        self.move_count += 1;

        Ok(if self.grid.is_uniform() {
            self.state = EngineState::Solved;
            PressOutcome::Solved
        } else {
            self.mark_started();
            PressOutcome::Pressed
        })
    }

    /// Same as [`Self::press`], addressed by the row-major linear index a
    /// click handler supplies.
    pub fn press_index(&mut self, index: CellCount) -> Result<PressOutcome> {
        let coords = self.grid.config().index_to_coords(index)?;
        self.press(coords)
    }

    fn mark_started(&mut self) {
        if matches!(self.state, EngineState::Ready) {
            self.state = EngineState::Active;
        }
    }

    fn check_not_solved(&self) -> Result<()> {
        if self.state.is_solved() {
            Err(GameError::AlreadySolved)
        } else {
            Ok(())
        }
    }
}
