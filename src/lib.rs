//! Mini Arcade
//!
//! Engines for a trio of casual mini-games: a word-search puzzle, a
//! Wordle-style guessing game, and a basketball toss. Game logic is kept
//! separate from rendering so the same engines drive the TUI, the plain CLI
//! commands, and the tests.
//!
//! # Quick Start
//!
//! ```rust
//! use mini_arcade::wordlists::travel_words;
//! use mini_arcade::wordsearch::{GeneratorConfig, generate};
//!
//! let words = travel_words();
//! let mut rng = rand::rng();
//! let puzzle = generate(&words, &GeneratorConfig::eight_way(), &mut rng).unwrap();
//! assert_eq!(puzzle.placements.len(), words.len());
//! ```

// Grid geometry primitives
pub mod core;

// Word-search puzzle engine
pub mod wordsearch;

// Wordle-style guessing game
pub mod wordle;

// Basketball toss flight simulation
pub mod hoops;

// Challenge progress and key-value persistence
pub mod progress;

// Embedded word sets
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
