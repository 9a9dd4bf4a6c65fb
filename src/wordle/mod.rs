//! Wordle-style guessing game
//!
//! A fixed secret word, six attempts, and the classic tile feedback. Scoring
//! handles duplicate letters the way the original game does: exact matches
//! consume their letter from the secret's pool first, then leftover letters
//! claim present-but-misplaced tiles from whatever remains.

use rustc_hash::FxHashMap;
use std::fmt;

/// Guess rows available per game
pub const MAX_ATTEMPTS: usize = 6;

/// Feedback for one tile of a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileState {
    /// Right letter, right position
    Correct,
    /// Letter occurs elsewhere in the secret
    Present,
    /// Letter not in the secret (or its copies are used up)
    Absent,
}

/// One submitted guess with its tile feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: String,
    pub tiles: Vec<TileState>,
}

/// Error type for Wordle moves
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordleError {
    EmptySecret,
    NonAlphabeticSecret(char),
    NotEnoughLetters,
    GameOver,
}

impl fmt::Display for WordleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySecret => write!(f, "Secret word must not be empty"),
            Self::NonAlphabeticSecret(ch) => {
                write!(f, "Secret word contains invalid character {ch:?}")
            }
            Self::NotEnoughLetters => write!(f, "Not enough letters"),
            Self::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for WordleError {}

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Score a guess against a secret of the same length
///
/// Two passes: correct tiles first, each consuming its letter from the
/// secret's pool, then present tiles from the leftovers. Comparison is
/// case-insensitive.
///
/// # Panics
/// Panics if the lengths differ; the game validates length before scoring.
///
/// # Examples
/// ```
/// use mini_arcade::wordle::{TileState, score_guess};
///
/// let tiles = score_guess("stink", "snick");
/// assert_eq!(
///     tiles,
///     vec![
///         TileState::Correct, // s
///         TileState::Present, // n
///         TileState::Correct, // i
///         TileState::Absent,  // c
///         TileState::Correct, // k
///     ]
/// );
/// ```
#[must_use]
pub fn score_guess(secret: &str, guess: &str) -> Vec<TileState> {
    let secret: Vec<char> = secret.chars().map(|ch| ch.to_ascii_lowercase()).collect();
    let guess: Vec<char> = guess.chars().map(|ch| ch.to_ascii_lowercase()).collect();
    assert_eq!(secret.len(), guess.len(), "guess length must match secret");

    let mut tiles = vec![TileState::Absent; guess.len()];
    let mut remaining: FxHashMap<char, usize> = FxHashMap::default();

    // First pass: correct positions, consuming from the pool
    for (i, (&g, &s)) in guess.iter().zip(secret.iter()).enumerate() {
        if g == s {
            tiles[i] = TileState::Correct;
        } else {
            *remaining.entry(s).or_insert(0) += 1;
        }
    }

    // Second pass: present letters from what's left
    for (i, &g) in guess.iter().enumerate() {
        if tiles[i] == TileState::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&g)
            && *count > 0
        {
            tiles[i] = TileState::Present;
            *count -= 1;
        }
    }

    tiles
}

/// One Wordle game against a fixed secret
pub struct WordleGame {
    secret: String,
    attempts: Vec<Attempt>,
    current: String,
    state: GameState,
}

impl WordleGame {
    /// Start a game with the given secret
    ///
    /// # Errors
    /// Returns `WordleError` if the secret is empty or not purely ASCII
    /// letters.
    pub fn new(secret: &str) -> Result<Self, WordleError> {
        if secret.is_empty() {
            return Err(WordleError::EmptySecret);
        }
        if let Some(ch) = secret.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(WordleError::NonAlphabeticSecret(ch));
        }
        Ok(Self {
            secret: secret.to_ascii_lowercase(),
            attempts: Vec::new(),
            current: String::new(),
            state: GameState::InProgress,
        })
    }

    /// Append a letter to the row being typed
    ///
    /// Ignored once the row is full, after the game ends, or for
    /// non-letter input.
    pub fn push_letter(&mut self, ch: char) {
        if self.state == GameState::InProgress
            && ch.is_ascii_alphabetic()
            && self.current.len() < self.secret.len()
        {
            self.current.push(ch.to_ascii_lowercase());
        }
    }

    /// Remove the last typed letter
    pub fn backspace(&mut self) {
        self.current.pop();
    }

    /// Submit the row being typed
    ///
    /// # Errors
    /// `NotEnoughLetters` when the row is shorter than the secret (the row
    /// is kept for further typing); `GameOver` after a win or loss.
    pub fn submit(&mut self) -> Result<&Attempt, WordleError> {
        if self.state != GameState::InProgress {
            return Err(WordleError::GameOver);
        }
        if self.current.len() < self.secret.len() {
            return Err(WordleError::NotEnoughLetters);
        }

        let guess = std::mem::take(&mut self.current);
        let tiles = score_guess(&self.secret, &guess);
        let is_win = guess == self.secret;
        self.attempts.push(Attempt { guess, tiles });

        if is_win {
            self.state = GameState::Won;
        } else if self.attempts.len() >= MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        Ok(self.attempts.last().expect("attempt just pushed"))
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The secret, for the end-of-game reveal
    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Row width, equal to the secret's length
    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.secret.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// The row currently being typed
    #[inline]
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.attempts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_all_correct() {
        assert_eq!(score_guess("stink", "stink"), vec![TileState::Correct; 5]);
    }

    #[test]
    fn score_all_absent() {
        assert_eq!(score_guess("stink", "moped"), vec![TileState::Absent; 5]);
    }

    #[test]
    fn score_is_case_insensitive() {
        assert_eq!(score_guess("STINK", "stink"), vec![TileState::Correct; 5]);
    }

    #[test]
    fn score_duplicate_letters_consume_pool() {
        // Secret has one E; the first unmatched E in the guess claims it,
        // the second goes gray.
        let tiles = score_guess("abcde", "eexyz");
        assert_eq!(tiles[0], TileState::Present);
        assert_eq!(tiles[1], TileState::Absent);

        // Correct tiles claim their letter before any present tile does
        let tiles = score_guess("llama", "label");
        assert_eq!(
            tiles,
            vec![
                TileState::Correct, // l
                TileState::Present, // a
                TileState::Absent,  // b
                TileState::Absent,  // e (no e in llama)
                TileState::Present, // l (second l of llama)
            ]
        );
    }

    #[test]
    fn game_win_flow() {
        let mut game = WordleGame::new("stink").unwrap();
        for ch in "snack".chars() {
            game.push_letter(ch);
        }
        let attempt = game.submit().unwrap();
        assert_eq!(attempt.tiles[0], TileState::Correct);
        assert_eq!(game.state(), GameState::InProgress);

        for ch in "stink".chars() {
            game.push_letter(ch);
        }
        game.submit().unwrap();
        assert_eq!(game.state(), GameState::Won);
        assert!(matches!(game.submit(), Err(WordleError::GameOver)));
    }

    #[test]
    fn game_loss_after_six_attempts() {
        let mut game = WordleGame::new("stink").unwrap();
        for _ in 0..MAX_ATTEMPTS {
            for ch in "wrong".chars() {
                game.push_letter(ch);
            }
            game.submit().unwrap();
        }
        assert_eq!(game.state(), GameState::Lost);
        assert_eq!(game.attempts_remaining(), 0);
        assert_eq!(game.secret(), "stink");
    }

    #[test]
    fn short_row_is_not_submittable() {
        let mut game = WordleGame::new("stink").unwrap();
        game.push_letter('s');
        assert!(matches!(game.submit(), Err(WordleError::NotEnoughLetters)));
        // Row kept for further typing
        assert_eq!(game.current(), "s");
    }

    #[test]
    fn typing_beyond_width_is_ignored() {
        let mut game = WordleGame::new("stink").unwrap();
        for ch in "abcdefgh".chars() {
            game.push_letter(ch);
        }
        assert_eq!(game.current(), "abcde");

        game.backspace();
        assert_eq!(game.current(), "abcd");
        game.push_letter('!');
        assert_eq!(game.current(), "abcd");
    }

    #[test]
    fn invalid_secrets_rejected() {
        assert!(matches!(WordleGame::new(""), Err(WordleError::EmptySecret)));
        assert!(matches!(
            WordleGame::new("st1nk"),
            Err(WordleError::NonAlphabeticSecret('1'))
        ));
    }
}
