use serde::{Deserialize, Serialize};

/// A unit step through the grid. Rows grow downwards, columns rightwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Down,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
    Left,
    Up,
}

impl Direction {
    /// Rightward, downward and the four diagonals. Words that only read
    /// leftwards or upwards are not found with this set.
    pub const FORWARD: [Direction; 6] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Down,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::Left,
        Direction::Up,
    ];

    /// `(row, col)` offset of one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::Left => (0, -1),
            Direction::Up => (-1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::search::direction::Direction;

    #[test]
    fn all_directions_are_distinct_unit_steps() {
        let deltas: HashSet<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        assert!(deltas.iter().all(|(dr, dc)| dr.abs() <= 1 && dc.abs() <= 1));
    }

    #[test]
    fn forward_set_leaves_out_left_and_up() {
        assert!(Direction::FORWARD.iter().all(|d| Direction::ALL.contains(d)));
        assert!(!Direction::FORWARD.contains(&Direction::Left));
        assert!(!Direction::FORWARD.contains(&Direction::Up));
    }
}
