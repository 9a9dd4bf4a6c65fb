//! Grid coordinates and compass directions
//!
//! A `Cell` is a (row, column) position on a puzzle grid. A `Direction` is
//! one of the 8 straight-line deltas a word placement may run along.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (row, column) position on a puzzle grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell `steps` moves away along `direction`
    ///
    /// Returns `None` when the step would leave the non-negative quadrant;
    /// bounds against a concrete grid are the grid's job.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row = self.row as i64 + i64::from(dr) * steps as i64;
        let col = self.col as i64 + i64::from(dc) * steps as i64;
        if row < 0 || col < 0 {
            return None;
        }
        Some(Self::new(row as usize, col as usize))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the 8 compass directions a placement may run along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All 8 compass directions (full puzzle variant)
    pub const ALL: [Self; 8] = [
        Self::Right,
        Self::Left,
        Self::Down,
        Self::Up,
        Self::DownRight,
        Self::DownLeft,
        Self::UpRight,
        Self::UpLeft,
    ];

    /// Right and down only (simplified puzzle variant)
    pub const RIGHT_DOWN: [Self; 2] = [Self::Right, Self::Down];

    /// Per-step (row, column) delta
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::Down => (1, 0),
            Self::Up => (-1, 0),
            Self::DownRight => (1, 1),
            Self::DownLeft => (1, -1),
            Self::UpRight => (-1, 1),
            Self::UpLeft => (-1, -1),
        }
    }

    /// Direction implied by the signs of the deltas between two cells
    ///
    /// Returns `None` when the cells coincide. The result only reflects the
    /// signs; callers that need a straight line must check collinearity
    /// themselves.
    #[must_use]
    pub fn between(start: Cell, end: Cell) -> Option<Self> {
        let dr = (end.row as i64 - start.row as i64).signum();
        let dc = (end.col as i64 - start.col as i64).signum();
        Self::from_signs(dr, dc)
    }

    const fn from_signs(dr: i64, dc: i64) -> Option<Self> {
        match (dr, dc) {
            (0, 1) => Some(Self::Right),
            (0, -1) => Some(Self::Left),
            (1, 0) => Some(Self::Down),
            (-1, 0) => Some(Self::Up),
            (1, 1) => Some(Self::DownRight),
            (1, -1) => Some(Self::DownLeft),
            (-1, 1) => Some(Self::UpRight),
            (-1, -1) => Some(Self::UpLeft),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_moves_along_direction() {
        let start = Cell::new(3, 3);
        assert_eq!(start.offset(Direction::Right, 2), Some(Cell::new(3, 5)));
        assert_eq!(start.offset(Direction::Up, 3), Some(Cell::new(0, 3)));
        assert_eq!(start.offset(Direction::UpLeft, 3), Some(Cell::new(0, 0)));
        assert_eq!(start.offset(Direction::DownRight, 0), Some(start));
    }

    #[test]
    fn offset_rejects_negative_coordinates() {
        let start = Cell::new(1, 1);
        assert_eq!(start.offset(Direction::Up, 2), None);
        assert_eq!(start.offset(Direction::Left, 2), None);
        assert_eq!(start.offset(Direction::UpLeft, 2), None);
    }

    #[test]
    fn between_covers_all_eight_directions() {
        let mid = Cell::new(2, 2);
        for dir in Direction::ALL {
            let end = mid.offset(dir, 2).unwrap();
            assert_eq!(Direction::between(mid, end), Some(dir));
        }
    }

    #[test]
    fn between_rejects_zero_length() {
        let cell = Cell::new(4, 4);
        assert_eq!(Direction::between(cell, cell), None);
    }

    #[test]
    fn between_ignores_collinearity() {
        // A knight-ish jump still maps to a sign pair; collinearity is the
        // selection validator's concern.
        assert_eq!(
            Direction::between(Cell::new(0, 0), Cell::new(1, 2)),
            Some(Direction::DownRight)
        );
    }
}
