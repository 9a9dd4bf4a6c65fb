//! Mini Arcade - CLI
//!
//! Three terminal mini-games behind one progress gate: a word search, a
//! Wordle clone, and a basketball toss.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mini_arcade::{
    commands::{GenerateConfig, run_generate, run_progress, run_simple, run_wordle},
    progress::{JsonFileStore, Tracker},
};

#[derive(Parser)]
#[command(
    name = "mini_arcade",
    about = "Terminal mini-games: word search, Wordle, and basketball toss",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path of the save file (default: .mini_arcade.json in the current directory)
    #[arg(short = 'f', long, global = true)]
    save_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - all three games)
    Play,

    /// Simple CLI mode (word search without TUI)
    Simple,

    /// Play Wordle in the terminal without TUI
    Wordle,

    /// Generate a word-search puzzle and print it
    Generate {
        /// Words to hide; defaults to the built-in travel list
        words: Vec<String>,

        /// Grid rows
        #[arg(short, long, default_value = "14")]
        rows: usize,

        /// Grid columns
        #[arg(short, long, default_value = "14")]
        cols: usize,

        /// Restrict words to run rightward or downward only
        #[arg(long)]
        easy: bool,

        /// Seed for reproducible grids
        #[arg(short, long)]
        seed: Option<u64>,

        /// Highlight where the words were hidden
        #[arg(long)]
        reveal: bool,
    },

    /// Show challenge progress
    Progress,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.save_file.as_deref() {
        Some(path) => JsonFileStore::new(path),
        None => JsonFileStore::default_location(),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(store),
        Commands::Simple => {
            let tracker = Tracker::new(Box::new(store.clone()));
            run_simple(store, &tracker).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Wordle => {
            let tracker = Tracker::new(Box::new(store));
            run_wordle(&tracker).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Generate {
            words,
            rows,
            cols,
            easy,
            seed,
            reveal,
        } => {
            let config = GenerateConfig {
                rows,
                cols,
                eight_way: !easy,
                seed,
                reveal,
            };
            run_generate(&words, &config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Progress => {
            let tracker = Tracker::new(Box::new(store));
            run_progress(&tracker);
            Ok(())
        }
    }
}

fn run_play_command(store: JsonFileStore) -> Result<()> {
    use mini_arcade::interactive::{App, run_tui};

    let tracker = Tracker::new(Box::new(store));
    let app = App::new(tracker)?;
    run_tui(app)
}
