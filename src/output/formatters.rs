//! Formatting utilities for terminal output

use crate::wordle::TileState;

/// Format a scored Wordle row as emoji tiles
#[must_use]
pub fn tiles_to_emoji(tiles: &[TileState]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            TileState::Correct => '🟩',
            TileState::Present => '🟨',
            TileState::Absent => '⬜',
        })
        .collect()
}

/// Checklist marker for a challenge or word
#[must_use]
pub const fn check_mark(done: bool) -> &'static str {
    if done { "✔" } else { "·" }
}

/// Column header line for a grid, e.g. `   0 1 2 3`
#[must_use]
pub fn column_header(cols: usize) -> String {
    let mut header = String::from("   ");
    for c in 0..cols {
        header.push_str(&format!("{:>2}", c % 10));
    }
    header
}
