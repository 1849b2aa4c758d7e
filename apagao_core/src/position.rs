use serde::{Deserialize, Serialize};

use crate::{CellCount, Coord2};

/// Where a cell sits relative to the board border, which fixes how many
/// cells one press flips. Derived on demand, never stored.
///
/// On single-row or single-column boards a cell can touch opposite borders
/// at once; corners win, then the left or top edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionClass {
    Corner,
    TopEdge,
    BottomEdge,
    LeftEdge,
    RightEdge,
    Interior,
}

impl PositionClass {
    pub fn of(size: Coord2, coords: Coord2) -> Self {
        let (x, y) = coords;
        let (max_x, max_y) = size;
        let on_left = x == 0;
        let on_right = x == max_x - 1;
        let on_top = y == 0;
        let on_bottom = y == max_y - 1;

        match (on_left || on_right, on_top || on_bottom) {
            (true, true) => Self::Corner,
            (false, true) if on_top => Self::TopEdge,
            (false, true) => Self::BottomEdge,
            (true, false) if on_left => Self::LeftEdge,
            (true, false) => Self::RightEdge,
            (false, false) => Self::Interior,
        }
    }

    /// Number of cells a press flips for this class, on boards with both
    /// dimensions at least two.
    pub const fn press_size(self) -> CellCount {
        match self {
            Self::Corner => 3,
            Self::TopEdge | Self::BottomEdge | Self::LeftEdge | Self::RightEdge => 4,
            Self::Interior => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: Coord2 = (5, 5);

    #[test]
    fn classifies_the_classic_board_regions() {
        use PositionClass::*;

        assert_eq!(PositionClass::of(CLASSIC, (0, 0)), Corner);
        assert_eq!(PositionClass::of(CLASSIC, (4, 0)), Corner);
        assert_eq!(PositionClass::of(CLASSIC, (0, 4)), Corner);
        assert_eq!(PositionClass::of(CLASSIC, (4, 4)), Corner);
        for mid in 1..4 {
            assert_eq!(PositionClass::of(CLASSIC, (mid, 0)), TopEdge);
            assert_eq!(PositionClass::of(CLASSIC, (mid, 4)), BottomEdge);
            assert_eq!(PositionClass::of(CLASSIC, (0, mid)), LeftEdge);
            assert_eq!(PositionClass::of(CLASSIC, (4, mid)), RightEdge);
        }
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(PositionClass::of(CLASSIC, (x, y)), Interior);
            }
        }
    }

    #[test]
    fn press_sizes_follow_the_class() {
        use PositionClass::*;

        assert_eq!(Corner.press_size(), 3);
        assert_eq!(TopEdge.press_size(), 4);
        assert_eq!(BottomEdge.press_size(), 4);
        assert_eq!(LeftEdge.press_size(), 4);
        assert_eq!(RightEdge.press_size(), 4);
        assert_eq!(Interior.press_size(), 5);
    }
}
