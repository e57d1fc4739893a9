//! Canonical actions, directions and the synonym tables that map player words
//! onto them.

mod action;
mod direction;
mod file;
mod table;

pub use action::{Action, Family};
pub use direction::{Direction, DirectionTable};
pub use file::VocabularyFile;
pub use table::{CustomCommand, MAX_PHRASE_WORDS, Vocabulary};
