use super::*;

/// Scrambles by pressing random cells on a dark board, so every start
/// position it produces can be solved by replaying the same presses.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomScrambler {
    seed: u64,
    intensity: ScrambleIntensity,
}

impl RandomScrambler {
    pub fn new(seed: u64, intensity: ScrambleIntensity) -> Self {
        Self { seed, intensity }
    }
}

impl GridScrambler for RandomScrambler {
    fn scramble(self, config: GridConfig) -> LightGrid {
        use rand::prelude::*;

        let mut grid = LightGrid::dark(config);

        // on 1x1 and 1x2 boards every press flips the whole board, so no
        // press sequence can leave them non-uniform
        if config.total_cells() <= 2 {
            log::warn!(
                "Board {}x{} is too small to scramble, starting solved",
                config.size.0,
                config.size.1
            );
            return grid;
        }

        let (size_x, size_y) = config.size;
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let presses = self.intensity.press_budget(config);

        for _ in 0..presses {
            let coords = (rng.random_range(0..size_x), rng.random_range(0..size_y));
            grid.apply_press(coords)
                .expect("press coords drawn inside the board");
        }

        if grid.is_uniform() {
            log::warn!(
                "Scramble with {} presses came out uniform, pressing until it sticks",
                presses
            );
            while grid.is_uniform() {
                let coords = (rng.random_range(0..size_x), rng.random_range(0..size_y));
                grid.apply_press(coords)
                    .expect("press coords drawn inside the board");
            }
        }

        grid
    }
}
