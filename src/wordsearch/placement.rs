//! Word placements
//!
//! A `Placement` records where one target word sits on the grid: its cells
//! in reading order, each one compass step apart.

use crate::core::{Cell, Direction};
use serde::{Deserialize, Serialize};

/// A word's assigned straight-line run of grid cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    word: String,
    cells: Vec<Cell>,
}

impl Placement {
    /// Pair a word with its cells
    ///
    /// # Panics
    /// Panics if the cell count does not match the word length; the
    /// generator never produces such a pair.
    #[must_use]
    pub fn new(word: String, cells: Vec<Cell>) -> Self {
        assert_eq!(
            word.len(),
            cells.len(),
            "placement for {word:?} must cover one cell per letter"
        );
        Self { word, cells }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn starts_at(&self, cell: Cell) -> bool {
        self.cells.first() == Some(&cell)
    }

    /// Whether `path` equals this placement's cells in reading order
    #[must_use]
    pub fn matches(&self, path: &[Cell]) -> bool {
        self.cells == path
    }

    /// Whether `path` equals this placement's cells read backwards
    #[must_use]
    pub fn matches_reversed(&self, path: &[Cell]) -> bool {
        self.cells.len() == path.len()
            && self.cells.iter().rev().zip(path.iter()).all(|(a, b)| a == b)
    }

    /// Whether `path` is a leading run of this placement's cells
    #[must_use]
    pub fn has_prefix(&self, path: &[Cell]) -> bool {
        path.len() <= self.cells.len() && self.cells[..path.len()] == *path
    }

    /// The constant per-step direction, when the cells really form a
    /// straight line
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        let first = *self.cells.first()?;
        let second = *self.cells.get(1)?;
        let dir = Direction::between(first, second)?;
        let straight = self
            .cells
            .iter()
            .enumerate()
            .all(|(i, &cell)| first.offset(dir, i) == Some(cell));
        straight.then_some(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_right() -> Placement {
        Placement::new(
            "CAT".to_string(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        )
    }

    #[test]
    fn matches_forward_only_on_exact_equality() {
        let placement = cat_right();
        assert!(placement.matches(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]));
        assert!(!placement.matches(&[Cell::new(0, 0), Cell::new(0, 1)]));
        assert!(!placement.matches(&[Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]));
    }

    #[test]
    fn matches_reversed() {
        let placement = cat_right();
        assert!(placement.matches_reversed(&[Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]));
        assert!(!placement.matches_reversed(&[Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]));
        assert!(!placement.matches_reversed(&[Cell::new(0, 2), Cell::new(0, 1)]));
    }

    #[test]
    fn prefix_matching() {
        let placement = cat_right();
        assert!(placement.has_prefix(&[Cell::new(0, 0)]));
        assert!(placement.has_prefix(&[Cell::new(0, 0), Cell::new(0, 1)]));
        assert!(placement.has_prefix(&placement.cells().to_vec()));
        assert!(!placement.has_prefix(&[Cell::new(0, 1)]));
        assert!(!placement.has_prefix(&[
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(0, 2),
            Cell::new(0, 3)
        ]));
    }

    #[test]
    fn direction_of_straight_and_bent_runs() {
        assert_eq!(cat_right().direction(), Some(Direction::Right));

        let bent = Placement::new(
            "CAT".to_string(),
            vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)],
        );
        assert_eq!(bent.direction(), None);
    }

    #[test]
    #[should_panic(expected = "one cell per letter")]
    fn mismatched_lengths_panic() {
        let _ = Placement::new("CAT".to_string(), vec![Cell::new(0, 0)]);
    }
}
