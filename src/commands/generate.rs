//! Puzzle generation command
//!
//! Builds one word-search grid and prints it, optionally revealing where the
//! words were hidden. A fixed seed reproduces the same grid.

use crate::output;
use crate::wordlists;
use crate::wordsearch::{GeneratorConfig, PlacementRules, WordList, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Options for the generate command
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub rows: usize,
    pub cols: usize,
    /// Allow all eight directions; otherwise words run right or down only
    pub eight_way: bool,
    pub seed: Option<u64>,
    pub reveal: bool,
}

/// Generate one puzzle and print it
///
/// Uses the built-in travel list when `labels` is empty.
///
/// # Errors
/// Returns an error when a label is invalid or the words cannot be placed on
/// a grid of the requested size.
pub fn run_generate(labels: &[String], config: &GenerateConfig) -> Result<(), String> {
    let words = if labels.is_empty() {
        wordlists::travel_words()
    } else {
        let labels: Vec<&str> = labels.iter().map(String::as_str).collect();
        WordList::from_labels(&labels).map_err(|e| e.to_string())?
    };

    let rules = if config.eight_way {
        PlacementRules::EightWay
    } else {
        PlacementRules::RightDown
    };
    let generator = GeneratorConfig::new(config.rows, config.cols, rules);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let puzzle = generate(&words, &generator, &mut rng).map_err(|e| e.to_string())?;

    output::print_generated(&puzzle, &words, config.reveal);
    Ok(())
}
