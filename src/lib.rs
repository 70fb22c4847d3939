// Library interface for vocab-trainer
// This allows integration tests to access internal modules

pub mod cli;
pub mod codec;
pub mod error;
pub mod ledger;
pub mod menu;
pub mod quiz;
pub mod shuffle;
pub mod store;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::{Result, VocabError};
pub use ledger::{ranked_entries, start_retest};
pub use menu::run_menu;
pub use quiz::{QuizSession, QuizSummary, RoundResult, SessionState};
pub use shuffle::permute;
pub use store::{LoadOutcome, MAX_FOLDERS, MAX_WORDS, WordEntry, WordStore};
