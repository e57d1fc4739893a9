//! Natural-language command parser for Adventure Construction Set games.
//!
//! Turns free-form player text ("take the ancient rusty sword", "tell bob to
//! attack the goblin") into an [`Intent`] the game engine can act on. The
//! pipeline is: lexical normalization, typo correction of the verb, verb
//! phrase resolution against a [`Vocabulary`], then per-action field
//! extraction. Parsing never fails; unknown verbs fall back to looking.
//!
//! ```
//! use acs_parser::{Action, CommandParser};
//!
//! let mut parser = CommandParser::default();
//! let intent = parser.parse("give gold to merchant");
//! assert_eq!(intent.action, Action::Give);
//! assert_eq!(intent.recipient.as_deref(), Some("merchant"));
//! ```

/// Parser configuration.
pub mod config;
/// Error types for vocabulary configuration.
pub mod error;
/// Tokenizing and normalizing raw input.
pub mod lexer;
/// Verb resolution, field extraction and the command parser.
pub mod parser;
/// Verb typo correction and command history.
pub mod typo;
/// Actions, directions and synonym tables.
pub mod vocabulary;

/// Re-export the parser configuration.
pub use config::ParserConfig;
/// Re-export error types.
pub use error::{VocabularyError, VocabularyResult};
/// Re-export the parser and its output.
pub use parser::{CommandParser, Intent, TradeMode, parse_command};
/// Re-export the command history.
pub use typo::CommandHistory;
/// Re-export vocabulary types.
pub use vocabulary::{Action, CustomCommand, Direction, Vocabulary, VocabularyFile};
