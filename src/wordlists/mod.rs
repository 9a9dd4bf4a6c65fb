//! Built-in word lists for the arcade games

use crate::wordsearch::WordList;
use rand::Rng;

/// Travel-themed labels for the word-search puzzle, as shown to the player
pub const TRAVEL_WORDS: [&str; 8] = [
    "Amsterdam",
    "Tokyo",
    "Osaka",
    "Auckland",
    "Queenstown",
    "Vancouver",
    "New York",
    "Paris",
];

/// Candidate secrets for the Wordle game, all five letters
pub const WORDLE_SECRETS: [&str; 10] = [
    "stink", "crane", "plane", "shore", "bloom", "track", "quiet", "vapor", "glide", "miner",
];

/// The travel word list used by the word-search puzzle
///
/// # Panics
/// Panics only if the built-in list is invalid, which the tests rule out.
#[must_use]
pub fn travel_words() -> WordList {
    WordList::from_labels(&TRAVEL_WORDS).expect("built-in travel list is valid")
}

/// Pick a Wordle secret at random
#[must_use]
pub fn pick_secret(rng: &mut impl Rng) -> &'static str {
    WORDLE_SECRETS[rng.random_range(0..WORDLE_SECRETS.len())]
}
