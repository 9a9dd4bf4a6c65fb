//! Grid geometry primitives
//!
//! This module contains the fundamental grid types with no game rules in
//! them: coordinates, straight-line directions, and the letter grid itself.

mod cell;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::{GridError, LetterGrid};
