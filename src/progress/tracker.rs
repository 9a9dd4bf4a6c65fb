//! Challenge completion tracking and access gating
//!
//! One progress record keyed by challenge name, plus the access-gate flag
//! that unlocks the arcade in the first place.

use super::store::KvStore;
use rustc_hash::FxHashMap;

/// Challenge keys, in menu order
pub const CHALLENGES: [&str; 3] = ["wordsearch", "wordle", "basketball"];

const PROGRESS_KEY: &str = "progress";
const ACCESS_KEY: &str = "access.granted";

/// Tracks which challenges have been completed
pub struct Tracker {
    store: Box<dyn KvStore>,
}

impl Tracker {
    #[must_use]
    pub fn new(store: Box<dyn KvStore>) -> Self {
        Self { store }
    }

    fn load(&self) -> FxHashMap<String, bool> {
        self.store
            .get(PROGRESS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn save(&self, progress: &FxHashMap<String, bool>) {
        if let Ok(serialized) = serde_json::to_string(progress) {
            self.store.set(PROGRESS_KEY, &serialized);
        }
    }

    /// Record `challenge` as completed
    pub fn mark_complete(&self, challenge: &str) {
        let mut progress = self.load();
        progress.insert(challenge.to_string(), true);
        self.save(&progress);
    }

    #[must_use]
    pub fn is_complete(&self, challenge: &str) -> bool {
        self.load().get(challenge).copied().unwrap_or(false)
    }

    /// Whether every challenge has been completed
    #[must_use]
    pub fn is_all_complete(&self) -> bool {
        let progress = self.load();
        CHALLENGES
            .iter()
            .all(|key| progress.get(*key).copied().unwrap_or(false))
    }

    /// Completion state per challenge, in menu order
    #[must_use]
    pub fn summary(&self) -> Vec<(&'static str, bool)> {
        let progress = self.load();
        CHALLENGES
            .iter()
            .map(|&key| (key, progress.get(key).copied().unwrap_or(false)))
            .collect()
    }

    /// Unlock the arcade
    pub fn grant_access(&self) {
        self.store.set(ACCESS_KEY, "true");
    }

    #[must_use]
    pub fn is_access_granted(&self) -> bool {
        self.store.get(ACCESS_KEY).as_deref() == Some("true")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryStore;

    fn tracker() -> Tracker {
        Tracker::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn fresh_tracker_has_nothing_complete() {
        let tracker = tracker();
        assert!(!tracker.is_complete("wordsearch"));
        assert!(!tracker.is_all_complete());
        assert!(!tracker.is_access_granted());
    }

    #[test]
    fn mark_complete_is_per_challenge() {
        let tracker = tracker();
        tracker.mark_complete("wordle");

        assert!(tracker.is_complete("wordle"));
        assert!(!tracker.is_complete("basketball"));
        assert!(!tracker.is_all_complete());
    }

    #[test]
    fn all_complete_requires_every_challenge() {
        let tracker = tracker();
        for challenge in CHALLENGES {
            assert!(!tracker.is_all_complete());
            tracker.mark_complete(challenge);
        }
        assert!(tracker.is_all_complete());
    }

    #[test]
    fn marking_twice_is_idempotent() {
        let tracker = tracker();
        tracker.mark_complete("wordsearch");
        tracker.mark_complete("wordsearch");
        assert!(tracker.is_complete("wordsearch"));
        assert_eq!(
            tracker.summary(),
            vec![("wordsearch", true), ("wordle", false), ("basketball", false)]
        );
    }

    #[test]
    fn access_gate() {
        let tracker = tracker();
        tracker.grant_access();
        assert!(tracker.is_access_granted());
    }
}
