//! Target word lists
//!
//! A `PuzzleWord` pairs the canonical uppercase grid form of a word with the
//! label shown in the word list. "NEW YORK" lives in the grid as `NEWYORK`
//! but is still displayed with its space.

use std::fmt;

/// A target word with its display label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleWord {
    canonical: String,
    display: String,
}

/// Error type for invalid word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
    InvalidCharacter { word: String, ch: char },
    Duplicate(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::InvalidCharacter { word, ch } => {
                write!(f, "Word {word:?} contains invalid character {ch:?}")
            }
            Self::Duplicate(word) => write!(f, "Duplicate word {word:?} in list"),
        }
    }
}

impl std::error::Error for WordListError {}

impl PuzzleWord {
    /// Create a word whose display label is the title-cased canonical form
    ///
    /// # Errors
    /// Returns `WordListError` if the word is empty or contains anything
    /// other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use mini_arcade::wordsearch::PuzzleWord;
    ///
    /// let word = PuzzleWord::new("tokyo").unwrap();
    /// assert_eq!(word.canonical(), "TOKYO");
    /// assert_eq!(word.display(), "Tokyo");
    /// ```
    pub fn new(word: &str) -> Result<Self, WordListError> {
        let canonical = Self::canonicalize(word)?;
        let mut display = canonical.clone();
        display[1..].make_ascii_lowercase();
        Ok(Self { canonical, display })
    }

    /// Create a word with an explicit display label
    ///
    /// The label may contain spaces; they are stripped from the canonical
    /// form used on the grid.
    ///
    /// # Errors
    /// Returns `WordListError` if the label holds no letters or contains
    /// anything other than ASCII letters and spaces.
    pub fn with_display(label: &str) -> Result<Self, WordListError> {
        let without_spaces: String = label.chars().filter(|ch| *ch != ' ').collect();
        let canonical = Self::canonicalize(&without_spaces)?;
        Ok(Self {
            canonical,
            display: label.to_string(),
        })
    }

    fn canonicalize(word: &str) -> Result<String, WordListError> {
        if word.is_empty() {
            return Err(WordListError::Empty);
        }
        if let Some(ch) = word.chars().find(|ch| !ch.is_ascii_alphabetic()) {
            return Err(WordListError::InvalidCharacter {
                word: word.to_string(),
                ch,
            });
        }
        Ok(word.to_ascii_uppercase())
    }

    /// The uppercase, space-free form placed on the grid
    #[inline]
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The label shown in the word list
    #[inline]
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

impl fmt::Display for PuzzleWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}

/// The fixed set of target words for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<PuzzleWord>,
}

impl WordList {
    /// Build a word list, rejecting duplicate canonical forms
    ///
    /// # Errors
    /// Returns `WordListError::Duplicate` if two entries share a canonical
    /// form, or `WordListError::Empty` for an empty list.
    pub fn new(words: Vec<PuzzleWord>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        for (i, word) in words.iter().enumerate() {
            if words[..i].iter().any(|w| w.canonical() == word.canonical()) {
                return Err(WordListError::Duplicate(word.canonical().to_string()));
            }
        }
        Ok(Self { words })
    }

    /// Build a list from plain labels, e.g. `["CAT", "DOG"]`
    ///
    /// # Errors
    /// Propagates the first invalid or duplicate word.
    pub fn from_labels(labels: &[&str]) -> Result<Self, WordListError> {
        let words = labels
            .iter()
            .map(|label| PuzzleWord::with_display(label))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PuzzleWord> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, canonical: &str) -> bool {
        self.words.iter().any(|w| w.canonical() == canonical)
    }

    /// Display label for a canonical form, if the word is in the list
    #[must_use]
    pub fn display_of(&self, canonical: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| w.canonical() == canonical)
            .map(PuzzleWord::display)
    }
}
