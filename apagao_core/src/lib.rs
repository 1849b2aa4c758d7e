#![no_std]

extern crate alloc;

use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use position::*;
pub use solver::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod position;
mod solver;
mod types;

/// Board shape, defaulting to the classic 5×5.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub size: Coord2,
}

impl GridConfig {
    pub const CLASSIC: Self = Self::new_unchecked((5, 5));

    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Row-major linear index of `coords`, as click handlers hand it over.
    pub fn coords_to_index(&self, coords: Coord2) -> CellCount {
        let (x, y) = coords;
        (y as CellCount) * (self.size.0 as CellCount) + (x as CellCount)
    }

    pub fn index_to_coords(&self, index: CellCount) -> Result<Coord2> {
        if index >= self.total_cells() {
            return Err(GameError::InvalidIndex);
        }
        let cols = self.size.0 as CellCount;
        Ok(((index % cols) as Coord, (index / cols) as Coord))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// Cells flipped by one press: the pressed cell plus its in-bounds
/// orthogonal neighbors, at most five on any board.
pub type PressSet = SmallVec<[Coord2; 5]>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightGrid {
    lights: Array2<LightState>,
}

impl LightGrid {
    /// All-off board of the given shape.
    pub fn dark(config: GridConfig) -> Self {
        Self {
            lights: Array2::default(config.size.to_nd_index()),
        }
    }

    pub fn from_states(lights: Array2<LightState>) -> Result<Self> {
        if lights.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        Ok(Self { lights })
    }

    pub fn from_lit_coords(size: Coord2, lit: &[Coord2]) -> Result<Self> {
        let mut grid = Self::dark(GridConfig::new(size));
        for &coords in lit {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            grid[coords] = LightState::On;
        }
        Ok(grid)
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::new_unchecked(self.size())
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.lights.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.lights.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.lights
            .iter()
            .filter(|state| state.is_on())
            .count()
            .try_into()
            .unwrap()
    }

    /// True when every cell shares one state, the solved condition.
    pub fn is_uniform(&self) -> bool {
        let mut states = self.lights.iter();
        let Some(&first) = states.next() else {
            return true;
        };
        states.all(|&state| state == first)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn position_class(&self, coords: Coord2) -> PositionClass {
        PositionClass::of(self.size(), coords)
    }

    /// Cells a press at `coords` would flip, without flipping them.
    pub fn press_set(&self, coords: Coord2) -> Result<PressSet> {
        let coords = self.validate_coords(coords)?;
        let mut cells = PressSet::new();
        cells.push(coords);
        cells.extend(self.lights.iter_neighbors(coords));
        Ok(cells)
    }

    /// Flips the pressed cell and its in-bounds orthogonal neighbors,
    /// returning the cells whose state changed. Applying the same press
    /// twice restores the board.
    pub fn apply_press(&mut self, coords: Coord2) -> Result<PressSet> {
        let cells = self.press_set(coords)?;
        for &cell in &cells {
            self.toggle(cell);
        }
        Ok(cells)
    }

    fn toggle(&mut self, coords: Coord2) {
        let cell = &mut self.lights[coords.to_nd_index()];
        *cell = cell.toggled();
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.lights.iter_neighbors(coords)
    }
}

impl Index<Coord2> for LightGrid {
    type Output = LightState;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.lights[(x as usize, y as usize)]
    }
}

impl IndexMut<Coord2> for LightGrid {
    fn index_mut(&mut self, (x, y): Coord2) -> &mut Self::Output {
        &mut self.lights[(x as usize, y as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    Pressed,
    Solved,
}

impl PressOutcome {
    pub const fn solved(self) -> bool {
        matches!(self, Self::Solved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn classic() -> LightGrid {
        LightGrid::dark(GridConfig::CLASSIC)
    }

    fn index_set(grid: &LightGrid, cells: &PressSet) -> Vec<CellCount> {
        let config = grid.config();
        let mut indices: Vec<_> = cells.iter().map(|&c| config.coords_to_index(c)).collect();
        indices.sort_unstable();
        indices
    }

    #[test]
    fn press_sets_match_the_classic_board_layout() {
        let grid = classic();

        let corner = grid.press_set((0, 0)).unwrap();
        assert_eq!(index_set(&grid, &corner), [0, 1, 5]);

        let center = grid.press_set((2, 2)).unwrap();
        assert_eq!(index_set(&grid, &center), [7, 11, 12, 13, 17]);

        let top_edge = grid.press_set((2, 0)).unwrap();
        assert_eq!(index_set(&grid, &top_edge), [1, 2, 3, 7]);

        let far_corner = grid.press_set((4, 4)).unwrap();
        assert_eq!(index_set(&grid, &far_corner), [19, 23, 24]);
    }

    #[test]
    fn every_press_set_contains_the_pressed_cell_and_matches_its_class() {
        let grid = classic();
        for y in 0..5 {
            for x in 0..5 {
                let coords = (x, y);
                let cells = grid.press_set(coords).unwrap();
                assert!(cells.contains(&coords));
                assert_eq!(
                    cells.len(),
                    grid.position_class(coords).press_size() as usize
                );
            }
        }
    }

    #[test]
    fn orthogonal_adjacency_is_symmetric() {
        let grid = classic();
        for y in 0..5 {
            for x in 0..5 {
                let coords = (x, y);
                for &other in grid.press_set(coords).unwrap().iter() {
                    if other == coords {
                        continue;
                    }
                    assert!(grid.press_set(other).unwrap().contains(&coords));
                }
            }
        }
    }

    #[test]
    fn double_press_restores_the_board() {
        let mut grid = LightGrid::from_lit_coords((5, 5), &[(1, 3), (4, 0)]).unwrap();
        let before = grid.clone();

        grid.apply_press((2, 2)).unwrap();
        assert_ne!(grid, before);
        grid.apply_press((2, 2)).unwrap();

        assert_eq!(grid, before);
    }

    #[test]
    fn pressing_the_first_cell_lights_it_and_its_two_neighbors() {
        let mut grid = classic();

        let changed = grid.apply_press((0, 0)).unwrap();

        assert_eq!(index_set(&grid, &changed), [0, 1, 5]);
        assert_eq!(grid.lit_count(), 3);
        assert!(!grid.is_uniform());
        for index in 0..25 {
            let coords = grid.config().index_to_coords(index).unwrap();
            let expected = matches!(index, 0 | 1 | 5);
            assert_eq!(grid[coords].is_on(), expected);
        }
    }

    #[test]
    fn uniform_detection_covers_both_states() {
        let mut grid = LightGrid::dark(GridConfig::new((3, 3)));
        assert!(grid.is_uniform());

        for y in 0..3 {
            for x in 0..3 {
                grid[(x, y)] = LightState::On;
            }
        }
        assert!(grid.is_uniform());

        grid[(1, 1)] = LightState::Off;
        assert!(!grid.is_uniform());
    }

    #[test]
    fn out_of_range_access_is_rejected() {
        let grid = classic();

        assert_eq!(grid.press_set((5, 0)), Err(GameError::InvalidCoords));
        assert_eq!(grid.validate_coords((0, 5)), Err(GameError::InvalidCoords));
        assert_eq!(
            LightGrid::from_lit_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            GridConfig::CLASSIC.index_to_coords(25),
            Err(GameError::InvalidIndex)
        );
    }

    #[test]
    fn presses_generalize_beyond_the_classic_shape() {
        let mut grid = LightGrid::dark(GridConfig::new((3, 7)));

        let changed = grid.apply_press((2, 6)).unwrap();

        assert_eq!(changed.len(), 3);
        assert!(changed.contains(&(2, 6)));
        assert!(changed.contains(&(1, 6)));
        assert!(changed.contains(&(2, 5)));
    }

    #[test]
    fn index_round_trip_covers_the_whole_board() {
        let config = GridConfig::new((4, 6));
        for index in 0..config.total_cells() {
            let coords = config.index_to_coords(index).unwrap();
            assert_eq!(config.coords_to_index(coords), index);
        }
    }

    #[test]
    fn from_states_rejects_empty_boards() {
        let empty: Array2<LightState> = Array2::default((0, 3));
        assert_eq!(LightGrid::from_states(empty), Err(GameError::EmptyBoard));
    }
}
