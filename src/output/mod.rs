//! Terminal output formatting
//!
//! Display utilities for puzzle grids, Wordle boards, and progress.

pub mod display;
pub mod formatters;

pub use display::{print_generated, print_progress, print_session, print_wordle_board};
