//! Challenge progress and key-value persistence
//!
//! The games never touch the filesystem directly; they speak to a small
//! get/set store capability so persistence can be swapped out (or left in
//! memory for tests).

mod store;
mod tracker;

pub use store::{JsonFileStore, KvStore, MemoryStore};
pub use tracker::{CHALLENGES, Tracker};
