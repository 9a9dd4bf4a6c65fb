//! Puzzle session state
//!
//! A `PuzzleSession` owns one play-through: the grid, the hidden placements,
//! the found set, and the in-progress click selection. The UI layer feeds it
//! gestures and paints cells from its answers; the session itself never
//! draws anything.
//!
//! When a store is attached (the click-style deployment), the session is
//! written back after every successful find and can be restored wholesale on
//! the next start, so a reload resumes instead of regenerating.

use super::generator::{GeneratedPuzzle, GenerateError, GeneratorConfig, generate};
use super::placement::Placement;
use super::selection::ClickSelection;
use super::selection::trace_line;
use super::words::WordList;
use crate::core::{Cell, LetterGrid};
use crate::progress::KvStore;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Storage key for the persisted puzzle record
pub const SAVE_KEY: &str = "wordsearch.puzzle";

/// Result of feeding a selection gesture to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Click selection grew and may still become a word
    Selecting,
    /// A word was found; repaint its cells and buzz
    WordFound { word: String, cells: Vec<Cell> },
    /// The last word was found; celebrate and report completion, fired at
    /// most once per session
    PuzzleComplete { word: String, cells: Vec<Cell> },
    /// Not a word path; selection discarded, nothing else changed
    NoMatch,
}

/// Per-cell visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Plain,
    Selected,
    Found,
}

/// The persisted puzzle record: grid, placements, and found words
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPuzzle {
    pub rows: Vec<String>,
    pub placements: Vec<Placement>,
    pub found: Vec<String>,
}

/// One word-search play-through
pub struct PuzzleSession {
    words: WordList,
    grid: LetterGrid,
    placements: Vec<Placement>,
    found: Vec<String>,
    found_cells: FxHashSet<Cell>,
    click: ClickSelection,
    completion_signalled: bool,
    store: Option<Box<dyn KvStore>>,
}

impl PuzzleSession {
    /// Wrap a freshly generated puzzle
    #[must_use]
    pub fn from_puzzle(words: WordList, puzzle: GeneratedPuzzle) -> Self {
        Self {
            words,
            grid: puzzle.grid,
            placements: puzzle.placements,
            found: Vec::new(),
            found_cells: FxHashSet::default(),
            click: ClickSelection::new(),
            completion_signalled: false,
            store: None,
        }
    }

    /// Generate a fresh puzzle session
    ///
    /// # Errors
    /// Propagates [`GenerateError`] when the word list cannot be placed.
    pub fn generate(
        words: WordList,
        config: &GeneratorConfig,
        rng: &mut impl rand::Rng,
    ) -> Result<Self, GenerateError> {
        let puzzle = generate(&words, config, rng)?;
        Ok(Self::from_puzzle(words, puzzle))
    }

    /// Attach a store; the session saves itself after every find
    #[must_use]
    pub fn with_store(mut self, store: Box<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Restore the persisted session from `store`, or generate a fresh one
    ///
    /// Any read, parse, or consistency problem with the saved record is
    /// treated as absence.
    ///
    /// # Errors
    /// Propagates [`GenerateError`] when a fresh puzzle is needed and the
    /// word list cannot be placed.
    pub fn load_or_generate(
        words: WordList,
        config: &GeneratorConfig,
        store: Box<dyn KvStore>,
        rng: &mut impl rand::Rng,
    ) -> Result<Self, GenerateError> {
        if let Some(session) = Self::try_restore(&words, store.as_ref()) {
            return Ok(session.with_store(store));
        }
        Ok(Self::generate(words, config, rng)?.with_store(store))
    }

    fn try_restore(words: &WordList, store: &dyn KvStore) -> Option<Self> {
        let raw = store.get(SAVE_KEY)?;
        let saved: SavedPuzzle = serde_json::from_str(&raw).ok()?;
        Self::from_saved(words.clone(), &saved)
    }

    /// Rebuild a session from a persisted record
    ///
    /// Returns `None` when the record does not describe a valid puzzle for
    /// `words`: wrong word set, incomplete grid, placements that don't spell
    /// their words, or found entries outside the word list.
    #[must_use]
    pub fn from_saved(words: WordList, saved: &SavedPuzzle) -> Option<Self> {
        let grid = LetterGrid::from_rows(&saved.rows).ok()?;
        if !grid.is_complete() {
            return None;
        }
        if saved.placements.len() != words.len() {
            return None;
        }
        for placement in &saved.placements {
            if !words.contains(placement.word()) {
                return None;
            }
            if placement.direction().is_none() {
                return None;
            }
            if grid.spell(placement.cells()).as_deref() != Some(placement.word()) {
                return None;
            }
        }
        if !saved.found.iter().all(|word| words.contains(word)) {
            return None;
        }

        let mut session = Self::from_puzzle(
            words,
            GeneratedPuzzle {
                grid,
                placements: saved.placements.clone(),
            },
        );
        for word in &saved.found {
            let cells: Vec<Cell> = session
                .placements
                .iter()
                .find(|p| p.word() == word)?
                .cells()
                .to_vec();
            session.found.push(word.clone());
            session.found_cells.extend(cells);
        }
        // A restored finished puzzle must not re-fire completion
        session.completion_signalled = session.found.len() == session.words.len();
        Some(session)
    }

    /// Snapshot the session for persistence
    #[must_use]
    pub fn to_saved(&self) -> SavedPuzzle {
        SavedPuzzle {
            rows: self.grid.to_rows(),
            placements: self.placements.clone(),
            found: self.found.clone(),
        }
    }

    fn persist(&self) {
        if let Some(store) = &self.store
            && let Ok(serialized) = serde_json::to_string(&self.to_saved())
        {
            store.set(SAVE_KEY, &serialized);
        }
    }

    /// Validate a drag gesture from `start` to `end` (full variant)
    ///
    /// The straight line between the two cells is matched against every
    /// unfound placement, forward and reversed. Out-of-bounds endpoints,
    /// zero-length drags, and non-collinear pairs all come back as
    /// [`SelectionOutcome::NoMatch`].
    pub fn match_drag(&mut self, start: Cell, end: Cell) -> SelectionOutcome {
        if !self.grid.contains(start) || !self.grid.contains(end) {
            return SelectionOutcome::NoMatch;
        }
        let Some(path) = trace_line(start, end) else {
            return SelectionOutcome::NoMatch;
        };

        let matched = self
            .placements
            .iter()
            .position(|p| !self.is_found(p.word()) && (p.matches(&path) || p.matches_reversed(&path)));
        match matched {
            Some(index) => self.mark_found(index),
            None => SelectionOutcome::NoMatch,
        }
    }

    /// Feed one click of the click-to-build gesture (simplified variant)
    ///
    /// After every accepted click the path is checked as a prefix of the
    /// unfound placements sharing its start cell; a path no placement can
    /// extend resets the selection. A path exactly as long as a matching
    /// placement's word finds that word, even when a longer placement shares
    /// the same leading cells.
    pub fn click(&mut self, cell: Cell) -> SelectionOutcome {
        if !self.grid.contains(cell) || self.click.click(cell).is_err() {
            self.click.clear();
            return SelectionOutcome::NoMatch;
        }

        // An exact-length match wins over a longer placement sharing the
        // prefix; otherwise any prefix match keeps the selection alive.
        let path = self.click.path().to_vec();
        let mut any_prefix = false;
        let mut exact = None;
        for (index, placement) in self.placements.iter().enumerate() {
            if self.is_found(placement.word())
                || !placement.starts_at(path[0])
                || !placement.has_prefix(&path)
            {
                continue;
            }
            any_prefix = true;
            if placement.len() == path.len() {
                exact = Some(index);
                break;
            }
        }

        if let Some(index) = exact {
            self.click.clear();
            self.mark_found(index)
        } else if any_prefix {
            SelectionOutcome::Selecting
        } else {
            self.click.clear();
            SelectionOutcome::NoMatch
        }
    }

    /// Discard any in-progress click selection
    pub fn clear_selection(&mut self) {
        self.click.clear();
    }

    fn mark_found(&mut self, placement_index: usize) -> SelectionOutcome {
        let word = self.placements[placement_index].word().to_string();
        let cells = self.placements[placement_index].cells().to_vec();

        self.found.push(word.clone());
        self.found_cells.extend(cells.iter().copied());
        self.persist();

        if self.found.len() == self.words.len() && !self.completion_signalled {
            self.completion_signalled = true;
            SelectionOutcome::PuzzleComplete { word, cells }
        } else {
            SelectionOutcome::WordFound { word, cells }
        }
    }

    /// Visual state for one cell
    ///
    /// Only the click selection is tracked here; a drag selection is
    /// transient UI state overlaid by the caller.
    #[must_use]
    pub fn cell_state(&self, cell: Cell) -> CellState {
        if self.found_cells.contains(&cell) {
            CellState::Found
        } else if self.click.contains(cell) {
            CellState::Selected
        } else {
            CellState::Plain
        }
    }

    #[inline]
    #[must_use]
    pub fn grid(&self) -> &LetterGrid {
        &self.grid
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[inline]
    #[must_use]
    pub fn selection_path(&self) -> &[Cell] {
        self.click.path()
    }

    #[must_use]
    pub fn is_found(&self, canonical: &str) -> bool {
        self.found.iter().any(|w| w == canonical)
    }

    #[inline]
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Whether every word has been found
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;
    use crate::wordsearch::PlacementRules;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::rc::Rc;

    /// 3x3 fixture with CAT down column 0 and DOG down column 1
    fn cat_dog_session() -> PuzzleSession {
        let words = WordList::from_labels(&["CAT", "DOG"]).unwrap();
        let saved = SavedPuzzle {
            rows: vec!["CDX".to_string(), "AOX".to_string(), "TGX".to_string()],
            placements: vec![
                Placement::new(
                    "CAT".to_string(),
                    vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
                ),
                Placement::new(
                    "DOG".to_string(),
                    vec![Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
                ),
            ],
            found: Vec::new(),
        };
        PuzzleSession::from_saved(words, &saved).unwrap()
    }

    #[test]
    fn drag_matches_forward() {
        let mut session = cat_dog_session();
        let outcome = session.match_drag(Cell::new(0, 0), Cell::new(2, 0));
        assert_eq!(
            outcome,
            SelectionOutcome::WordFound {
                word: "CAT".to_string(),
                cells: vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
            }
        );
        assert!(session.is_found("CAT"));
        assert_eq!(session.cell_state(Cell::new(1, 0)), CellState::Found);
    }

    #[test]
    fn drag_matches_reversed() {
        let mut session = cat_dog_session();
        let outcome = session.match_drag(Cell::new(2, 1), Cell::new(0, 1));
        assert!(matches!(
            outcome,
            SelectionOutcome::WordFound { ref word, .. } if word == "DOG"
        ));
    }

    #[test]
    fn drag_rejects_bad_geometry() {
        let mut session = cat_dog_session();
        // Zero-length
        assert_eq!(
            session.match_drag(Cell::new(0, 0), Cell::new(0, 0)),
            SelectionOutcome::NoMatch
        );
        // Non-collinear
        assert_eq!(
            session.match_drag(Cell::new(0, 0), Cell::new(1, 2)),
            SelectionOutcome::NoMatch
        );
        // Out of bounds
        assert_eq!(
            session.match_drag(Cell::new(0, 0), Cell::new(5, 0)),
            SelectionOutcome::NoMatch
        );
        // Nothing found along the way
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn drag_wrong_line_is_no_match() {
        let mut session = cat_dog_session();
        // Column 2 spells XXX, not a target
        assert_eq!(
            session.match_drag(Cell::new(0, 2), Cell::new(2, 2)),
            SelectionOutcome::NoMatch
        );
        // Partial CAT is too short to equal the placement
        assert_eq!(
            session.match_drag(Cell::new(0, 0), Cell::new(1, 0)),
            SelectionOutcome::NoMatch
        );
    }

    #[test]
    fn refinding_a_found_word_is_inert() {
        let mut session = cat_dog_session();
        assert!(matches!(
            session.match_drag(Cell::new(0, 0), Cell::new(2, 0)),
            SelectionOutcome::WordFound { .. }
        ));
        // Same path again: found set unchanged, no re-trigger
        assert_eq!(
            session.match_drag(Cell::new(0, 0), Cell::new(2, 0)),
            SelectionOutcome::NoMatch
        );
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut session = cat_dog_session();
        assert!(matches!(
            session.match_drag(Cell::new(0, 0), Cell::new(2, 0)),
            SelectionOutcome::WordFound { .. }
        ));
        assert!(matches!(
            session.match_drag(Cell::new(0, 1), Cell::new(2, 1)),
            SelectionOutcome::PuzzleComplete { ref word, .. } if word == "DOG"
        ));
        assert!(session.is_complete());

        // Redundant matches after completion never re-fire the signal
        assert_eq!(
            session.match_drag(Cell::new(0, 1), Cell::new(2, 1)),
            SelectionOutcome::NoMatch
        );
        assert_eq!(session.found_count(), 2);
    }

    #[test]
    fn click_prefix_grows_then_matches() {
        let mut session = cat_dog_session();
        assert_eq!(session.click(Cell::new(0, 0)), SelectionOutcome::Selecting);
        // Too short is not a mismatch
        assert_eq!(session.click(Cell::new(1, 0)), SelectionOutcome::Selecting);
        assert_eq!(session.cell_state(Cell::new(1, 0)), CellState::Selected);
        assert!(matches!(
            session.click(Cell::new(2, 0)),
            SelectionOutcome::WordFound { ref word, .. } if word == "CAT"
        ));
        assert!(session.selection_path().is_empty());
    }

    #[test]
    fn click_exact_length_wins_over_longer_shared_prefix() {
        // CAT occupies the first three cells of CATTLE's run; the third
        // click must find CAT even though CATTLE's prefix also matches.
        let words = WordList::from_labels(&["CATTLE", "CAT"]).unwrap();
        let cattle_cells: Vec<Cell> = (0..6).map(|c| Cell::new(0, c)).collect();
        let saved = SavedPuzzle {
            rows: vec!["CATTLE".to_string()],
            placements: vec![
                Placement::new("CATTLE".to_string(), cattle_cells),
                Placement::new(
                    "CAT".to_string(),
                    vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
                ),
            ],
            found: Vec::new(),
        };
        let mut session = PuzzleSession::from_saved(words, &saved).unwrap();

        assert_eq!(session.click(Cell::new(0, 0)), SelectionOutcome::Selecting);
        assert_eq!(session.click(Cell::new(0, 1)), SelectionOutcome::Selecting);
        assert!(matches!(
            session.click(Cell::new(0, 2)),
            SelectionOutcome::WordFound { ref word, .. } if word == "CAT"
        ));
        assert!(session.selection_path().is_empty());

        // CATTLE is still findable along the full run afterwards
        for c in 0..5 {
            assert_eq!(session.click(Cell::new(0, c)), SelectionOutcome::Selecting);
        }
        assert!(matches!(
            session.click(Cell::new(0, 5)),
            SelectionOutcome::PuzzleComplete { ref word, .. } if word == "CATTLE"
        ));
    }

    #[test]
    fn click_rejects_non_prefix_start() {
        let mut session = cat_dog_session();
        // No placement starts at (2, 2)
        assert_eq!(session.click(Cell::new(2, 2)), SelectionOutcome::NoMatch);
        assert!(session.selection_path().is_empty());
    }

    #[test]
    fn click_rejects_wrong_direction_and_resets() {
        let mut session = cat_dog_session();
        assert_eq!(session.click(Cell::new(0, 0)), SelectionOutcome::Selecting);
        // Valid right-neighbor step, but no placement runs right from (0,0)
        assert_eq!(session.click(Cell::new(0, 1)), SelectionOutcome::NoMatch);
        assert!(session.selection_path().is_empty());
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn click_rejects_diagonal_then_straight() {
        let mut session = cat_dog_session();
        assert_eq!(session.click(Cell::new(0, 0)), SelectionOutcome::Selecting);
        // Diagonal neighbor violates the right/down rule outright
        assert_eq!(session.click(Cell::new(1, 1)), SelectionOutcome::NoMatch);
        assert_eq!(session.found_count(), 0);
    }

    #[test]
    fn click_out_of_bounds_resets() {
        let mut session = cat_dog_session();
        assert_eq!(session.click(Cell::new(0, 0)), SelectionOutcome::Selecting);
        assert_eq!(session.click(Cell::new(9, 9)), SelectionOutcome::NoMatch);
        assert!(session.selection_path().is_empty());
    }

    #[test]
    fn saved_round_trip_reproduces_state() {
        let mut session = cat_dog_session();
        session.match_drag(Cell::new(0, 0), Cell::new(2, 0));

        let saved = session.to_saved();
        let restored =
            PuzzleSession::from_saved(session.words().clone(), &saved).unwrap();

        assert_eq!(restored.grid(), session.grid());
        assert_eq!(restored.placements(), session.placements());
        assert!(restored.is_found("CAT"));
        assert!(!restored.is_found("DOG"));
        assert_eq!(restored.to_saved(), saved);
    }

    #[test]
    fn restored_complete_puzzle_does_not_refire() {
        let mut session = cat_dog_session();
        session.match_drag(Cell::new(0, 0), Cell::new(2, 0));
        session.match_drag(Cell::new(0, 1), Cell::new(2, 1));

        let mut restored =
            PuzzleSession::from_saved(session.words().clone(), &session.to_saved()).unwrap();
        assert!(restored.is_complete());
        assert_eq!(
            restored.match_drag(Cell::new(0, 0), Cell::new(2, 0)),
            SelectionOutcome::NoMatch
        );
    }

    #[test]
    fn from_saved_rejects_inconsistent_records() {
        let words = WordList::from_labels(&["CAT", "DOG"]).unwrap();
        let good = cat_dog_session().to_saved();

        // Grid letters disagreeing with a placement
        let mut bad = good.clone();
        bad.rows[0] = "XDX".to_string();
        assert!(PuzzleSession::from_saved(words.clone(), &bad).is_none());

        // Found word outside the list
        let mut bad = good.clone();
        bad.found.push("EMU".to_string());
        assert!(PuzzleSession::from_saved(words.clone(), &bad).is_none());

        // Missing placement
        let mut bad = good;
        bad.placements.pop();
        assert!(PuzzleSession::from_saved(words, &bad).is_none());
    }

    #[test]
    fn finds_are_persisted_through_the_store() {
        let store = Rc::new(MemoryStore::new());
        let mut session =
            cat_dog_session().with_store(Box::new(Rc::clone(&store)));

        assert_eq!(store.get(SAVE_KEY), None);
        session.match_drag(Cell::new(0, 0), Cell::new(2, 0));

        let raw = store.get(SAVE_KEY).expect("find should persist");
        let saved: SavedPuzzle = serde_json::from_str(&raw).unwrap();
        assert_eq!(saved.found, vec!["CAT".to_string()]);
    }

    #[test]
    fn load_or_generate_resumes_persisted_state() {
        let store = Rc::new(MemoryStore::new());
        let words = WordList::from_labels(&["CAT", "DOG"]).unwrap();
        let config = GeneratorConfig::new(3, 3, PlacementRules::RightDown);
        let mut rng = StdRng::seed_from_u64(11);

        let mut first = PuzzleSession::load_or_generate(
            words.clone(),
            &config,
            Box::new(Rc::clone(&store)),
            &mut rng,
        )
        .unwrap();
        let cat_cells = first
            .placements()
            .iter()
            .find(|p| p.word() == "CAT")
            .unwrap()
            .cells()
            .to_vec();
        let outcome = first.match_drag(cat_cells[0], *cat_cells.last().unwrap());
        assert!(matches!(outcome, SelectionOutcome::WordFound { .. }));
        let snapshot = first.to_saved();

        // "Reload": same store, fresh rng; the identical puzzle comes back
        let second = PuzzleSession::load_or_generate(
            words,
            &config,
            Box::new(Rc::clone(&store)),
            &mut StdRng::seed_from_u64(999),
        )
        .unwrap();
        assert_eq!(second.to_saved(), snapshot);
        assert!(second.is_found("CAT"));
    }

    #[test]
    fn corrupt_store_regenerates_fresh() {
        let store = Rc::new(MemoryStore::new());
        store.set(SAVE_KEY, "{not json");

        let words = WordList::from_labels(&["CAT", "DOG"]).unwrap();
        let config = GeneratorConfig::new(3, 3, PlacementRules::RightDown);
        let session = PuzzleSession::load_or_generate(
            words,
            &config,
            Box::new(Rc::clone(&store)),
            &mut StdRng::seed_from_u64(12),
        )
        .unwrap();

        assert_eq!(session.found_count(), 0);
        assert!(session.grid().is_complete());
    }
}
