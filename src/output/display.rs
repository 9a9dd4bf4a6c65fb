//! Display functions for command results

use super::formatters::{check_mark, column_header, tiles_to_emoji};
use crate::core::Cell;
use crate::wordle::{GameState, WordleGame};
use crate::wordsearch::{CellState, GeneratedPuzzle, PuzzleSession, WordList};
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print a generated puzzle, optionally highlighting the hidden words
pub fn print_generated(puzzle: &GeneratedPuzzle, words: &WordList, reveal: bool) {
    let hidden: FxHashSet<Cell> = puzzle
        .placements
        .iter()
        .flat_map(|p| p.cells().iter().copied())
        .collect();

    println!("\n{}", column_header(puzzle.grid.cols()).bright_black());
    for r in 0..puzzle.grid.rows() {
        print!("{}", format!("{r:>2} ").bright_black());
        for c in 0..puzzle.grid.cols() {
            let letter = puzzle.grid.get(Cell::new(r, c)).unwrap_or('.');
            if reveal && hidden.contains(&Cell::new(r, c)) {
                print!("{}", format!("{letter:>2}").bright_yellow().bold());
            } else {
                print!("{letter:>2}");
            }
        }
        println!();
    }

    println!("\n{}", "Find:".bright_cyan().bold());
    for word in words.iter() {
        if reveal {
            let placement = puzzle.placements.iter().find(|p| p.word() == word.canonical());
            match placement.and_then(|p| p.cells().first()) {
                Some(start) => println!("  {} {}", word.display(), format!("at {start}").bright_black()),
                None => println!("  {}", word.display()),
            }
        } else {
            println!("  {}", word.display());
        }
    }
}

/// Print a play-through: grid colored by cell state, then the word checklist
pub fn print_session(session: &PuzzleSession) {
    let grid = session.grid();

    println!("\n{}", column_header(grid.cols()).bright_black());
    for r in 0..grid.rows() {
        print!("{}", format!("{r:>2} ").bright_black());
        for c in 0..grid.cols() {
            let cell = Cell::new(r, c);
            let letter = grid.get(cell).unwrap_or('.');
            let painted = match session.cell_state(cell) {
                CellState::Found => format!("{letter:>2}").green().bold(),
                CellState::Selected => format!("{letter:>2}").black().on_yellow(),
                CellState::Plain => format!("{letter:>2}").normal(),
            };
            print!("{painted}");
        }
        println!();
    }

    println!();
    for word in session.words().iter() {
        let found = session.is_found(word.canonical());
        let mark = check_mark(found);
        if found {
            println!("  {} {}", mark.green(), word.display().green());
        } else {
            println!("  {mark} {}", word.display());
        }
    }
    println!(
        "\n{} of {} found",
        session.found_count().to_string().bright_yellow().bold(),
        session.words().len()
    );
}

/// Print the Wordle board: scored rows, then the row being typed
pub fn print_wordle_board(game: &WordleGame) {
    println!();
    for attempt in game.attempts() {
        let letters: String = attempt
            .guess
            .to_uppercase()
            .chars()
            .map(|ch| format!(" {ch}"))
            .collect();
        println!("  {} {}", letters.bold(), tiles_to_emoji(&attempt.tiles));
    }
    if game.state() == GameState::InProgress {
        let typed: String = game
            .current()
            .to_uppercase()
            .chars()
            .map(|ch| format!(" {ch}"))
            .collect();
        let blanks = " _".repeat(game.width() - game.current().len());
        println!("  {}{}", typed.bright_yellow(), blanks.bright_black());
    }
}

/// Print the per-challenge progress summary
pub fn print_progress(summary: &[(&str, bool)], access_granted: bool) {
    println!("\n{}", "Challenge progress".bright_cyan().bold());
    for (challenge, done) in summary {
        let mark = check_mark(*done);
        if *done {
            println!("  {} {}", mark.green(), challenge.green());
        } else {
            println!("  {mark} {challenge}");
        }
    }

    if summary.iter().all(|(_, done)| *done) {
        println!("\n{}", "🎉 All challenges complete!".green().bold());
    }
    if access_granted {
        println!("{}", "Access granted".bright_black());
    }
}
