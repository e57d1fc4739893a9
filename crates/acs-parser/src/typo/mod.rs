//! Typo correction for the verb position, biased by recent commands.

mod corrector;
mod history;

pub use corrector::{Suggestion, correct, suggest};
pub use history::CommandHistory;
