//! Command implementations

pub mod generate;
pub mod progress;
pub mod simple;
pub mod wordle;

pub use generate::{GenerateConfig, run_generate};
pub use progress::run_progress;
pub use simple::run_simple;
pub use wordle::run_wordle;
