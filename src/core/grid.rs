//! Letter grid storage
//!
//! A `LetterGrid` holds the puzzle letters. Cells are empty only while a
//! puzzle is being generated; a finished puzzle has every cell filled with
//! one uppercase ASCII letter.

use super::Cell;
use rand::Rng;
use std::fmt;

/// A fixed-size grid of uppercase letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

/// Error type for malformed serialized grids
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    EmptyDimensions,
    RaggedRows { expected: usize, got: usize },
    InvalidLetter(char),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDimensions => write!(f, "Grid must have at least one row and column"),
            Self::RaggedRows { expected, got } => {
                write!(f, "Expected rows of {expected} letters, got {got}")
            }
            Self::InvalidLetter(ch) => write!(f, "Invalid grid letter {ch:?}"),
        }
    }
}

impl std::error::Error for GridError {}

impl LetterGrid {
    /// Create an empty grid of the given dimensions
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "grid dimensions must be non-zero");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// The letter at `cell`, or `None` when the cell is out of bounds or
    /// still empty
    #[inline]
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        if self.contains(cell) {
            self.cells[cell.row * self.cols + cell.col]
        } else {
            None
        }
    }

    /// Write a letter into `cell`
    ///
    /// Writing the letter a cell already holds is fine; placements are
    /// allowed to cross where they agree.
    ///
    /// # Panics
    /// Panics if the cell is out of bounds or the letter is not an uppercase
    /// ASCII letter.
    pub fn set(&mut self, cell: Cell, letter: char) {
        assert!(self.contains(cell), "cell {cell} out of bounds");
        assert!(
            letter.is_ascii_uppercase(),
            "grid letters must be uppercase ASCII, got {letter:?}"
        );
        self.cells[cell.row * self.cols + cell.col] = Some(letter);
    }

    /// Whether every cell holds a letter
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Fill every still-empty cell with a uniformly random uppercase letter
    pub fn fill_random(&mut self, rng: &mut impl Rng) {
        for slot in &mut self.cells {
            if slot.is_none() {
                let letter = char::from(b'A' + rng.random_range(0..26u8));
                *slot = Some(letter);
            }
        }
    }

    /// The word spelled by reading `path` in order
    ///
    /// Returns `None` if any cell is out of bounds or empty.
    #[must_use]
    pub fn spell(&self, path: &[Cell]) -> Option<String> {
        path.iter().map(|&cell| self.get(cell)).collect()
    }

    /// Serialize as one string per row, with `.` for empty cells
    #[must_use]
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .map(|r| {
                (0..self.cols)
                    .map(|c| self.get(Cell::new(r, c)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    /// Rebuild a grid from [`Self::to_rows`] output
    ///
    /// # Errors
    /// Returns a `GridError` if the rows are empty, ragged, or contain
    /// anything other than uppercase ASCII letters and `.`.
    pub fn from_rows(rows: &[String]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, String::len);
        if rows.is_empty() || cols == 0 {
            return Err(GridError::EmptyDimensions);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.chars().count() != cols {
                return Err(GridError::RaggedRows {
                    expected: cols,
                    got: row.chars().count(),
                });
            }
            for ch in row.chars() {
                match ch {
                    '.' => cells.push(None),
                    ch if ch.is_ascii_uppercase() => cells.push(Some(ch)),
                    other => return Err(GridError::InvalidLetter(other)),
                }
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_empty() {
        let grid = LetterGrid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert!(!grid.is_complete());
        assert_eq!(grid.get(Cell::new(0, 0)), None);
    }

    #[test]
    fn set_and_get_round_trip() {
        let mut grid = LetterGrid::new(3, 3);
        grid.set(Cell::new(1, 2), 'Q');
        assert_eq!(grid.get(Cell::new(1, 2)), Some('Q'));
        assert_eq!(grid.get(Cell::new(2, 1)), None);
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let grid = LetterGrid::new(2, 2);
        assert_eq!(grid.get(Cell::new(2, 0)), None);
        assert_eq!(grid.get(Cell::new(0, 2)), None);
    }

    #[test]
    #[should_panic(expected = "uppercase ASCII")]
    fn set_rejects_lowercase() {
        let mut grid = LetterGrid::new(2, 2);
        grid.set(Cell::new(0, 0), 'q');
    }

    #[test]
    fn fill_random_completes_grid_with_uppercase() {
        let mut grid = LetterGrid::new(5, 5);
        grid.set(Cell::new(0, 0), 'Z');
        let mut rng = StdRng::seed_from_u64(7);
        grid.fill_random(&mut rng);

        assert!(grid.is_complete());
        assert_eq!(grid.get(Cell::new(0, 0)), Some('Z'));
        for r in 0..5 {
            for c in 0..5 {
                let letter = grid.get(Cell::new(r, c)).unwrap();
                assert!(letter.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn spell_reads_path_in_order() {
        let mut grid = LetterGrid::new(2, 3);
        grid.set(Cell::new(0, 0), 'C');
        grid.set(Cell::new(0, 1), 'A');
        grid.set(Cell::new(0, 2), 'T');

        let path = [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)];
        assert_eq!(grid.spell(&path), Some("CAT".to_string()));

        // Empty cell along the path
        assert_eq!(grid.spell(&[Cell::new(1, 0)]), None);
        // Out of bounds
        assert_eq!(grid.spell(&[Cell::new(5, 5)]), None);
    }

    #[test]
    fn rows_round_trip() {
        let mut grid = LetterGrid::new(2, 2);
        grid.set(Cell::new(0, 0), 'A');
        grid.set(Cell::new(1, 1), 'B');

        let rows = grid.to_rows();
        assert_eq!(rows, vec!["A.".to_string(), ".B".to_string()]);

        let restored = LetterGrid::from_rows(&rows).unwrap();
        assert_eq!(restored, grid);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert!(matches!(
            LetterGrid::from_rows(&[]),
            Err(GridError::EmptyDimensions)
        ));
        assert!(matches!(
            LetterGrid::from_rows(&["AB".to_string(), "A".to_string()]),
            Err(GridError::RaggedRows { expected: 2, got: 1 })
        ));
        assert!(matches!(
            LetterGrid::from_rows(&["a".to_string()]),
            Err(GridError::InvalidLetter('a'))
        ));
    }
}
