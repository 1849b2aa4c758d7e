use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Widest board the solver will enumerate first rows for.
const MAX_CHASE_WIDTH: Coord = 16;

/// A press sequence that leaves the board uniform. Press order never
/// matters, so `presses` is listed row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub presses: Vec<Coord2>,
}

impl Solution {
    pub fn press_count(&self) -> usize {
        self.presses.len()
    }
}

/// Finds the smallest press sequence that leaves `grid` uniform, or `None`
/// when no sequence exists.
///
/// Light chasing: every press pattern on the first row forces the rest of
/// the board row by row, so enumerating first rows against both uniform
/// targets covers every solution that presses no cell twice.
pub fn solve(grid: &LightGrid) -> Result<Option<Solution>> {
    let (size_x, _) = grid.size();
    if size_x > MAX_CHASE_WIDTH {
        return Err(GameError::BoardTooWide);
    }

    let mut best: Option<Solution> = None;
    for target in [LightState::Off, LightState::On] {
        for first_row in 0u32..(1u32 << size_x) {
            if let Some(solution) = chase(grid, target, first_row) {
                let better = best
                    .as_ref()
                    .map_or(true, |b| solution.press_count() < b.press_count());
                if better {
                    best = Some(solution);
                }
            }
        }
    }

    Ok(best)
}

pub fn is_solvable(grid: &LightGrid) -> Result<bool> {
    Ok(solve(grid)?.is_some())
}

fn chase(grid: &LightGrid, target: LightState, first_row: u32) -> Option<Solution> {
    let (size_x, size_y) = grid.size();
    let mut scratch = grid.clone();
    let mut presses = Vec::new();

    for x in 0..size_x {
        if first_row & (1u32 << x) != 0 {
            press_into(&mut scratch, &mut presses, (x, 0));
        }
    }

    // each row below fixes the row above it
    for y in 1..size_y {
        for x in 0..size_x {
            if scratch[(x, y - 1)] != target {
                press_into(&mut scratch, &mut presses, (x, y));
            }
        }
    }

    for x in 0..size_x {
        if scratch[(x, size_y - 1)] != target {
            return None;
        }
    }

    Some(Solution { presses })
}

fn press_into(grid: &mut LightGrid, presses: &mut Vec<Coord2>, coords: Coord2) {
    grid.apply_press(coords)
        .expect("chasing presses stay inside the board");
    presses.push(coords);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    fn apply(grid: &LightGrid, solution: &Solution) -> LightGrid {
        let mut grid = grid.clone();
        for &coords in &solution.presses {
            grid.apply_press(coords).unwrap();
        }
        grid
    }

    #[test]
    fn uniform_boards_solve_with_zero_presses() {
        let dark = LightGrid::dark(GridConfig::CLASSIC);
        let solution = solve(&dark).unwrap().unwrap();
        assert_eq!(solution.press_count(), 0);
    }

    #[test]
    fn star_board_solves_with_a_single_center_press() {
        let star =
            LightGrid::from_lit_coords((5, 5), &[(2, 1), (1, 2), (2, 2), (3, 2), (2, 3)]).unwrap();

        let solution = solve(&star).unwrap().unwrap();

        assert_eq!(solution.presses, [(2, 2)]);
        assert!(apply(&star, &solution).is_uniform());
    }

    #[test]
    fn fully_lit_board_counts_as_already_solved() {
        let lit = Array2::from_elem((5, 5), LightState::On);
        let grid = LightGrid::from_states(lit).unwrap();

        let solution = solve(&grid).unwrap().unwrap();

        assert_eq!(solution.press_count(), 0);
    }

    #[test]
    fn pressing_every_cell_yields_a_solvable_position() {
        let mut grid = LightGrid::dark(GridConfig::CLASSIC);
        for y in 0..5 {
            for x in 0..5 {
                grid.apply_press((x, y)).unwrap();
            }
        }
        assert!(!grid.is_uniform());

        let solution = solve(&grid).unwrap().unwrap();

        assert!(solution.press_count() > 0);
        assert!(apply(&grid, &solution).is_uniform());
    }

    #[test]
    fn single_lit_corner_is_unsolvable_on_the_classic_board() {
        let grid = LightGrid::from_lit_coords((5, 5), &[(0, 0)]).unwrap();
        assert_eq!(solve(&grid).unwrap(), None);
        assert!(!is_solvable(&grid).unwrap());
    }

    #[test]
    fn every_three_by_three_board_is_solvable() {
        // the 3x3 toggle matrix has full rank, so any start position works
        for lit in [&[(1, 1)][..], &[(0, 0)][..], &[(0, 1), (2, 2)][..]] {
            let grid = LightGrid::from_lit_coords((3, 3), lit).unwrap();
            let solution = solve(&grid).unwrap().unwrap();
            assert!(apply(&grid, &solution).is_uniform());
        }
    }

    #[test]
    fn solutions_survive_non_square_shapes() {
        let mut grid = LightGrid::dark(GridConfig::new((4, 6)));
        for coords in [(0, 0), (3, 2), (1, 5)] {
            grid.apply_press(coords).unwrap();
        }

        let solution = solve(&grid).unwrap().unwrap();

        assert!(solution.press_count() <= 3);
        assert!(apply(&grid, &solution).is_uniform());
    }

    #[test]
    fn wide_boards_are_refused() {
        let wide: Array2<LightState> = Array2::default((17, 2));
        let grid = LightGrid::from_states(wide).unwrap();
        assert_eq!(solve(&grid), Err(GameError::BoardTooWide));
    }
}
