//! Progress summary command

use crate::output;
use crate::progress::Tracker;

/// Print per-challenge progress and grant access once everything is done
pub fn run_progress(tracker: &Tracker) {
    if tracker.is_all_complete() && !tracker.is_access_granted() {
        tracker.grant_access();
    }
    output::print_progress(&tracker.summary(), tracker.is_access_granted());
}
