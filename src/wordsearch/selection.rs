//! Selection paths
//!
//! Geometry for the two selection gestures: materializing the straight line
//! of a drag, and growing a click-by-click path one fixed-direction step at
//! a time. Matching against placements is the session's job.

use crate::core::{Cell, Direction};
use std::fmt;

/// Materialize the straight line from `start` to `end`, inclusive
///
/// Returns `None` for a zero-length pair (start == end) or when the two
/// cells are not on a common horizontal, vertical, or 45° diagonal line.
///
/// # Examples
/// ```
/// use mini_arcade::core::Cell;
/// use mini_arcade::wordsearch::trace_line;
///
/// let path = trace_line(Cell::new(2, 2), Cell::new(2, 0)).unwrap();
/// assert_eq!(path, vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(2, 0)]);
///
/// assert!(trace_line(Cell::new(0, 0), Cell::new(0, 0)).is_none());
/// assert!(trace_line(Cell::new(0, 0), Cell::new(1, 2)).is_none());
/// ```
#[must_use]
pub fn trace_line(start: Cell, end: Cell) -> Option<Vec<Cell>> {
    let dr = (end.row as i64 - start.row as i64).abs();
    let dc = (end.col as i64 - start.col as i64).abs();
    if dr != 0 && dc != 0 && dr != dc {
        return None;
    }

    let dir = Direction::between(start, end)?;
    let len = dr.max(dc) as usize + 1;
    (0..len).map(|i| start.offset(dir, i)).collect()
}

/// How a click broke the selection rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionViolation {
    /// Second click was not the immediate right or down neighbor of the
    /// start cell
    NotNeighbor,
    /// A later click did not continue one step in the fixed direction
    WrongStep,
}

impl fmt::Display for SelectionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotNeighbor => write!(f, "Pick the cell just right of or below the start"),
            Self::WrongStep => write!(f, "Keep going in the same direction, one cell at a time"),
        }
    }
}

/// The click-to-build selection gesture (simplified puzzle variant)
///
/// The first click fixes the start; the second click must be the immediate
/// right or down neighbor, fixing the direction; every later click must
/// continue one step further the same way. State is untouched on a rejected
/// click so the caller decides whether to reset.
#[derive(Debug, Clone, Default)]
pub struct ClickSelection {
    path: Vec<Cell>,
    direction: Option<Direction>,
}

impl ClickSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.path.contains(&cell)
    }

    /// Discard the in-progress selection
    pub fn clear(&mut self) {
        self.path.clear();
        self.direction = None;
    }

    /// Extend the selection with one clicked cell
    ///
    /// # Errors
    /// Returns the violated rule without changing the selection.
    pub fn click(&mut self, cell: Cell) -> Result<(), SelectionViolation> {
        match (self.path.last().copied(), self.direction) {
            (None, _) => {
                self.path.push(cell);
                Ok(())
            }
            (Some(start), None) => {
                let dir = Direction::RIGHT_DOWN
                    .into_iter()
                    .find(|&d| start.offset(d, 1) == Some(cell))
                    .ok_or(SelectionViolation::NotNeighbor)?;
                self.direction = Some(dir);
                self.path.push(cell);
                Ok(())
            }
            (Some(last), Some(dir)) => {
                if last.offset(dir, 1) == Some(cell) {
                    self.path.push(cell);
                    Ok(())
                } else {
                    Err(SelectionViolation::WrongStep)
                }
            }
        }
    }
}
