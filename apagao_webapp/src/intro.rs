use apagao_core::{Coord, Coord2, GridConfig, LightGrid};

/// One timed batch of cell flips in the opening animation.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IntroStep {
    pub at_ms: u32,
    pub cells: Vec<Coord2>,
}

/// The opening choreography as plain data: a spiral sweep that double-flips
/// every cell, then lights the star. One scheduler consumes the steps in
/// order; nothing here touches timers or the DOM.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct IntroTimeline {
    pub steps: Vec<IntroStep>,
    pub finished_at_ms: u32,
}

const STEP_MS: u32 = 200;
const REVERT_MS: u32 = 650;
const STAR_GAP_MS: u32 = 150;
const FINISH_GAP_MS: u32 = 400;

impl IntroTimeline {
    pub fn for_config(config: GridConfig) -> Self {
        let order = spiral_order(config);
        let mut steps = Vec::with_capacity(order.len() * 2 + 1);

        for (i, &coords) in order.iter().enumerate() {
            let at_ms = i as u32 * STEP_MS;
            steps.push(IntroStep {
                at_ms,
                cells: vec![coords],
            });
            steps.push(IntroStep {
                at_ms: at_ms + REVERT_MS,
                cells: vec![coords],
            });
        }

        let star_at_ms = order.len() as u32 * STEP_MS + REVERT_MS + STAR_GAP_MS;
        steps.push(IntroStep {
            at_ms: star_at_ms,
            cells: star_cells(config),
        });
        steps.sort_by_key(|step| step.at_ms);

        Self {
            steps,
            finished_at_ms: star_at_ms + FINISH_GAP_MS,
        }
    }
}

/// Visits every cell once, counterclockwise from the top-left corner: down
/// the left column, along the bottom, up the right, then inward until the
/// walk ends near the center.
fn spiral_order(config: GridConfig) -> Vec<Coord2> {
    let (size_x, size_y) = config.size;
    let mut order = Vec::with_capacity(config.total_cells() as usize);
    let (mut left, mut right) = (0 as Coord, size_x - 1);
    let (mut top, mut bottom) = (0 as Coord, size_y - 1);

    loop {
        for y in top..=bottom {
            order.push((left, y));
        }
        if left == right {
            break;
        }
        left += 1;

        for x in left..=right {
            order.push((x, bottom));
        }
        if top == bottom {
            break;
        }
        bottom -= 1;

        for y in (top..=bottom).rev() {
            order.push((right, y));
        }
        if left == right {
            break;
        }
        right -= 1;

        for x in (left..=right).rev() {
            order.push((x, top));
        }
        if top == bottom {
            break;
        }
        top += 1;
    }

    order
}

/// The star the animation leaves behind: the center cell's press set, so the
/// opening board is one press away from solved.
fn star_cells(config: GridConfig) -> Vec<Coord2> {
    let center = (config.size.0 / 2, config.size.1 / 2);
    LightGrid::dark(config)
        .press_set(center)
        .expect("center is always on the board")
        .into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic_indices(cells: impl IntoIterator<Item = Coord2>) -> Vec<u16> {
        cells
            .into_iter()
            .map(|coords| GridConfig::CLASSIC.coords_to_index(coords))
            .collect()
    }

    #[test]
    fn spiral_matches_the_classic_opening_order() {
        let order = spiral_order(GridConfig::CLASSIC);
        assert_eq!(
            classic_indices(order),
            [
                0, 5, 10, 15, 20, 21, 22, 23, 24, 19, 14, 9, 4, 3, 2, 1, 6, 11, 16, 17, 18, 13, 8,
                7, 12
            ]
        );
    }

    #[test]
    fn spiral_visits_every_cell_once_on_other_shapes() {
        for size in [(5, 5), (4, 6), (1, 3), (2, 2), (3, 1)] {
            let config = GridConfig::new(size);
            let order = spiral_order(config);
            let mut seen = order.clone();
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(order.len(), config.total_cells() as usize);
            assert_eq!(seen.len(), config.total_cells() as usize);
        }
    }

    #[test]
    fn star_is_the_center_press_set() {
        let mut star = classic_indices(star_cells(GridConfig::CLASSIC));
        star.sort_unstable();
        assert_eq!(star, [7, 11, 12, 13, 17]);
    }

    #[test]
    fn timeline_double_flips_every_cell_and_ends_with_the_star() {
        let timeline = IntroTimeline::for_config(GridConfig::CLASSIC);

        assert_eq!(timeline.steps.len(), 51);
        let star = timeline.steps.last().unwrap();
        assert_eq!(star.at_ms, 5800);
        assert_eq!(star.cells.len(), 5);
        assert!(timeline.finished_at_ms > star.at_ms);

        let mut at = 0;
        for step in &timeline.steps {
            assert!(step.at_ms >= at);
            at = step.at_ms;
        }

        // replaying every step on a dark board leaves exactly the star lit
        let mut board = LightGrid::dark(GridConfig::CLASSIC);
        for step in &timeline.steps {
            for &coords in &step.cells {
                let state = &mut board[coords];
                *state = state.toggled();
            }
        }
        assert_eq!(board.lit_count(), 5);
        assert!(board[(2, 2)].is_on());
    }
}
