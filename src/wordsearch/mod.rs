//! Word-search puzzle engine
//!
//! Generates a letter grid hiding a fixed list of target words, validates
//! user-selected straight-line paths against the hidden placements, and
//! tracks which words have been found.
//!
//! Two selection styles exist, matching the two deployed flavors of the
//! game:
//!
//! - the **drag** style: all 8 compass directions, a selection is the
//!   straight line between a press and a release, matched forward or
//!   reversed ([`PuzzleSession::match_drag`]);
//! - the **click** style: right/down placements only, a selection is built
//!   one neighboring cell at a time and checked as a prefix after every
//!   click, with the session persisted between reloads
//!   ([`PuzzleSession::click`]).

mod generator;
mod placement;
mod selection;
mod session;
mod words;

pub use generator::{
    DEFAULT_MAX_ATTEMPTS, GeneratedPuzzle, GenerateError, GeneratorConfig, PlacementRules,
    generate,
};
pub use placement::Placement;
pub use selection::{ClickSelection, SelectionViolation, trace_line};
pub use session::{CellState, PuzzleSession, SAVE_KEY, SavedPuzzle, SelectionOutcome};
pub use words::{PuzzleWord, WordList, WordListError};
