//! Wordle command
//!
//! Text-based Wordle without TUI: one secret, six typed guesses, the board
//! reprinted after every submission.

use crate::output;
use crate::progress::Tracker;
use crate::wordle::{GameState, WordleError, WordleGame};
use crate::wordlists;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};

/// Run the text-mode Wordle game
///
/// # Errors
/// Returns an error if user input cannot be read.
pub fn run_wordle(tracker: &Tracker) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║            Wordle - Interactive Mode         ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!("Guess the five-letter word in six tries.");
    println!("🟩 right spot · 🟨 wrong spot · ⬜ not in the word\n");
    println!("Commands: 'quit' to exit\n");

    let secret = wordlists::pick_secret(&mut StdRng::from_os_rng());
    let mut game = WordleGame::new(secret).map_err(|e| e.to_string())?;

    loop {
        output::print_wordle_board(&game);

        let input = get_user_input("\nGuess")?.to_lowercase();
        if matches!(input.as_str(), "quit" | "q" | "exit") {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        type_guess(&mut game, &input);
        match game.submit() {
            Ok(_) => match game.state() {
                GameState::Won => {
                    output::print_wordle_board(&game);
                    println!("\n🎉 Solved it!");
                    tracker.mark_complete("wordle");
                    if tracker.is_all_complete() {
                        tracker.grant_access();
                        println!("🏆 That was the last challenge. Access granted!");
                    }
                    return Ok(());
                }
                GameState::Lost => {
                    output::print_wordle_board(&game);
                    println!(
                        "\n😅 Out of guesses. The word was {}.",
                        game.secret().to_uppercase()
                    );
                    return Ok(());
                }
                GameState::InProgress => {}
            },
            Err(WordleError::NotEnoughLetters) => {
                println!("❌ Enter a full {}-letter word", game.width());
            }
            Err(err) => println!("❌ {err}"),
        }
    }
}

/// Replace the row being typed with `input`'s letters
fn type_guess(game: &mut WordleGame, input: &str) {
    while !game.current().is_empty() {
        game.backspace();
    }
    for ch in input.chars() {
        game.push_letter(ch);
    }
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
