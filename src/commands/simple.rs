//! Simple interactive CLI mode
//!
//! Text-based word search without TUI: the click-to-build variant, played by
//! typing cell coordinates. Progress persists through the store, so quitting
//! mid-puzzle and coming back resumes the same grid.

use crate::core::Cell;
use crate::output;
use crate::progress::{KvStore, Tracker};
use crate::wordlists;
use crate::wordsearch::{GeneratorConfig, PuzzleSession, SAVE_KEY, SelectionOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the simple interactive word-search mode
///
/// # Errors
/// Returns an error if user input cannot be read or the puzzle cannot be
/// generated.
pub fn run_simple<S: KvStore + Clone + 'static>(
    store: S,
    tracker: &Tracker,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║        Word Search - Interactive Mode        ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Click cells one at a time by typing `row col`, e.g. `3 7`.");
    println!("Words read to the right or straight down. A wrong cell");
    println!("resets the selection.\n");
    println!("Commands: 'clear' to drop the selection, 'restart' for a");
    println!("fresh grid, 'quit' to exit\n");

    let config = GeneratorConfig::right_down();
    let mut session = PuzzleSession::load_or_generate(
        wordlists::travel_words(),
        &config,
        Box::new(store.clone()),
        &mut StdRng::from_os_rng(),
    )
    .map_err(|e| e.to_string())?;

    if session.is_complete() {
        println!("This puzzle is already solved. Type 'restart' for a new one.");
    }

    loop {
        output::print_session(&session);

        let input = get_user_input("\nCell (row col)")?.to_lowercase();
        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "clear" | "c" => {
                session.clear_selection();
                continue;
            }
            "restart" | "new" => {
                // Invalidate the save so the next load generates afresh
                store.set(SAVE_KEY, "");
                session = PuzzleSession::load_or_generate(
                    wordlists::travel_words(),
                    &config,
                    Box::new(store.clone()),
                    &mut StdRng::from_os_rng(),
                )
                .map_err(|e| e.to_string())?;
                println!("\n🔄 New puzzle!\n");
                continue;
            }
            _ => {}
        }

        let Some(cell) = parse_cell(&input) else {
            println!("❌ Enter two numbers like `3 7`, or a command");
            continue;
        };

        match session.click(cell) {
            SelectionOutcome::Selecting => {}
            SelectionOutcome::WordFound { word, .. } => {
                let label = session.words().display_of(&word).unwrap_or(&word).to_string();
                println!("\n✅ Found {label}!");
            }
            SelectionOutcome::PuzzleComplete { word, .. } => {
                let label = session.words().display_of(&word).unwrap_or(&word).to_string();
                println!("\n✅ Found {label}!");
                output::print_session(&session);
                println!("\n🎉 Puzzle complete!");
                tracker.mark_complete("wordsearch");
                if tracker.is_all_complete() {
                    tracker.grant_access();
                    println!("🏆 That was the last challenge. Access granted!");
                }
                return Ok(());
            }
            SelectionOutcome::NoMatch => {
                println!("✗ No word that way. Selection cleared.");
            }
        }
    }
}

fn parse_cell(input: &str) -> Option<Cell> {
    let mut parts = input.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Cell::new(row, col))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
