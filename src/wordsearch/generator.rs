//! Puzzle generation
//!
//! Places every target word on the grid as a straight contiguous run, longest
//! word first, then fills the leftover cells with random letters. A word that
//! cannot be placed anywhere throws the whole grid away and starts over; the
//! retry loop is bounded so a word list that genuinely cannot fit surfaces as
//! an error instead of spinning forever.

use super::placement::Placement;
use super::words::{PuzzleWord, WordList};
use crate::core::{Cell, Direction, LetterGrid};
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Generation attempts before giving up on a word list / grid size combination
pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

/// Which directions placements may run along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRules {
    /// All 8 compass directions, shuffled per word (drag-style puzzles)
    EightWay,
    /// Right and down only, preferred order alternating per word
    /// (click-style puzzles)
    RightDown,
}

impl PlacementRules {
    /// Direction candidates for the word at `word_index` in placement order
    fn directions(self, word_index: usize, rng: &mut impl Rng) -> Vec<Direction> {
        match self {
            Self::EightWay => {
                let mut dirs = Direction::ALL.to_vec();
                dirs.shuffle(rng);
                dirs
            }
            Self::RightDown => {
                // Alternate the preferred direction so the puzzle doesn't
                // end up all-horizontal.
                if word_index % 2 == 0 {
                    vec![Direction::Right, Direction::Down]
                } else {
                    vec![Direction::Down, Direction::Right]
                }
            }
        }
    }
}

/// Configuration for puzzle generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    pub rules: PlacementRules,
    pub max_attempts: usize,
}

impl GeneratorConfig {
    #[must_use]
    pub const fn new(rows: usize, cols: usize, rules: PlacementRules) -> Self {
        Self {
            rows,
            cols,
            rules,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// The 14×14, 8-direction puzzle
    #[must_use]
    pub const fn eight_way() -> Self {
        Self::new(14, 14, PlacementRules::EightWay)
    }

    /// The 12×12 right/down puzzle
    #[must_use]
    pub const fn right_down() -> Self {
        Self::new(12, 12, PlacementRules::RightDown)
    }
}

/// Error type for failed generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// A word is longer than any straight run the grid can hold
    WordTooLong {
        word: String,
        rows: usize,
        cols: usize,
    },
    /// Every attempt ended with some word unplaceable; the word list is too
    /// dense for the grid
    AttemptsExhausted { attempts: usize },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WordTooLong { word, rows, cols } => {
                write!(f, "Word {word:?} cannot fit on a {rows}x{cols} grid")
            }
            Self::AttemptsExhausted { attempts } => {
                write!(
                    f,
                    "Could not place every word after {attempts} attempts; \
                     shrink the word list or enlarge the grid"
                )
            }
        }
    }
}

impl std::error::Error for GenerateError {}

/// A freshly generated grid with its placements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    pub grid: LetterGrid,
    pub placements: Vec<Placement>,
}

/// Generate a puzzle hiding every word in `words`
///
/// # Errors
///
/// Returns `GenerateError::WordTooLong` when a word cannot fit in any
/// direction, and `GenerateError::AttemptsExhausted` when placement keeps
/// failing after `config.max_attempts` fresh grids.
pub fn generate(
    words: &WordList,
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Result<GeneratedPuzzle, GenerateError> {
    let longest_run = config.rows.max(config.cols);
    if let Some(word) = words.iter().find(|w| w.len() > longest_run) {
        return Err(GenerateError::WordTooLong {
            word: word.canonical().to_string(),
            rows: config.rows,
            cols: config.cols,
        });
    }

    // Longest first improves the odds of every word finding a slot.
    let mut order: Vec<&PuzzleWord> = words.iter().collect();
    order.sort_by(|a, b| b.len().cmp(&a.len()));

    for _ in 0..config.max_attempts {
        if let Some(puzzle) = try_build(&order, config, rng) {
            return Ok(puzzle);
        }
    }

    Err(GenerateError::AttemptsExhausted {
        attempts: config.max_attempts,
    })
}

/// One full placement pass over a fresh grid; `None` when any word fails
fn try_build(
    order: &[&PuzzleWord],
    config: &GeneratorConfig,
    rng: &mut impl Rng,
) -> Option<GeneratedPuzzle> {
    let mut grid = LetterGrid::new(config.rows, config.cols);
    let mut placements = Vec::with_capacity(order.len());

    let mut starts: Vec<Cell> = (0..config.rows)
        .flat_map(|r| (0..config.cols).map(move |c| Cell::new(r, c)))
        .collect();

    for (index, word) in order.iter().enumerate() {
        starts.shuffle(rng);
        let dirs = config.rules.directions(index, rng);
        let placement = place_word(&mut grid, word.canonical(), &starts, &dirs)?;
        placements.push(placement);
    }

    grid.fill_random(rng);
    Some(GeneratedPuzzle { grid, placements })
}

fn place_word(
    grid: &mut LetterGrid,
    word: &str,
    starts: &[Cell],
    dirs: &[Direction],
) -> Option<Placement> {
    for &start in starts {
        for &dir in dirs {
            if let Some(cells) = placeable_cells(grid, word, start, dir) {
                for (cell, letter) in cells.iter().zip(word.chars()) {
                    grid.set(*cell, letter);
                }
                return Some(Placement::new(word.to_string(), cells));
            }
        }
    }
    None
}

/// The cells `word` would occupy from `start` along `dir`, if every one is
/// in bounds and empty or already holding the required letter
fn placeable_cells(
    grid: &LetterGrid,
    word: &str,
    start: Cell,
    dir: Direction,
) -> Option<Vec<Cell>> {
    let mut cells = Vec::with_capacity(word.len());
    for (i, letter) in word.chars().enumerate() {
        let cell = start.offset(dir, i)?;
        if !grid.contains(cell) {
            return None;
        }
        match grid.get(cell) {
            None => {}
            Some(existing) if existing == letter => {}
            Some(_) => return None,
        }
        cells.push(cell);
    }
    Some(cells)
}
