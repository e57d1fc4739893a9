//! The command parser: normalize, correct, resolve, extract.

use std::sync::LazyLock;

use super::extract::{Clause, extract};
use super::intent::Intent;
use super::resolver::{Resolution, resolve};
use crate::config::ParserConfig;
use crate::lexer;
use crate::typo::{self, CommandHistory};
use crate::vocabulary::{Action, Vocabulary};

static DEFAULT_PARSER: LazyLock<CommandParser> = LazyLock::new(CommandParser::default);

/// Parse one command line with the default vocabulary and no history.
///
/// ```
/// use acs_parser::{Action, Direction, parse_command};
///
/// let intent = parse_command("go north");
/// assert_eq!(intent.action, Action::Move);
/// assert_eq!(intent.direction, Some(Direction::North));
/// ```
pub fn parse_command(input: &str) -> Intent {
    DEFAULT_PARSER.parse_sentence(input)
}

/// Turns player text into [`Intent`]s.
///
/// Owns a [`Vocabulary`] that stays fixed while parsing and the rolling
/// [`CommandHistory`] that biases typo correction. Parsing never fails:
/// blank input gives [`Action::Nothing`] and unknown verbs fall back to
/// [`Action::Look`].
///
/// The parser is not internally synchronized. A host that shares one across
/// threads must serialize calls to [`parse`](Self::parse).
#[derive(Debug, Clone)]
pub struct CommandParser {
    vocabulary: Vocabulary,
    history: CommandHistory,
    config: ParserConfig,
}

impl Default for CommandParser {
    fn default() -> Self {
        Self::new(Vocabulary::default())
    }
}

impl CommandParser {
    /// Create a parser with the default configuration.
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_config(vocabulary, ParserConfig::default())
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(vocabulary: Vocabulary, config: ParserConfig) -> Self {
        Self {
            vocabulary,
            history: CommandHistory::new(config.history_capacity),
            config,
        }
    }

    /// Parse a command and remember its verb for later typo correction.
    ///
    /// Only recognized commands are remembered; questions, blank input and
    /// fallbacks leave the history untouched.
    pub fn parse(&mut self, input: &str) -> Intent {
        let (intent, verb) = self.analyze(input);
        let remember = intent.is_recognized() && intent.action != Action::Question;
        if let Some(verb) = verb.filter(|_| remember) {
            self.history.push(verb);
        }
        intent
    }

    /// Parse a command without touching the history.
    pub fn parse_sentence(&self, input: &str) -> Intent {
        self.analyze(input).0
    }

    /// The vocabulary verbs are resolved against.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The parser configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Verbs accepted so far, oldest first.
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Forget the command history (new game).
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Returns the intent and the (corrected) first word.
    fn analyze(&self, input: &str) -> (Intent, Option<String>) {
        let mut words = lexer::normalize(input);
        let Some(first) = words.first_mut() else {
            return (Intent::nothing(), None);
        };
        *first = typo::correct(first, &self.vocabulary, &self.history, &self.config);

        let resolution = resolve(&words, &self.vocabulary);
        if resolution == Resolution::Unrecognized {
            tracing::debug!(input, "unrecognized command, falling back to look");
            return (Intent::unrecognized(), None);
        }

        let action = resolution.action();
        let (verb, rest) = words.split_at(resolution.verb_len());
        let intent = extract(Clause {
            action: &action,
            verb,
            rest,
            vocabulary: &self.vocabulary,
            input,
        });
        tracing::debug!(action = %intent.action, "parsed command");
        (intent, words.first().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{CustomCommand, Direction};

    #[test]
    fn blank_input_is_nothing() {
        assert_eq!(parse_command(""), Intent::nothing());
        assert_eq!(parse_command(" \t "), Intent::nothing());
    }

    #[test]
    fn unknown_verb_falls_back() {
        let intent = parse_command("poke stick");
        assert_eq!(intent.action, Action::Look);
        assert!(intent.fallback);
        assert_eq!(intent.target, None);
    }

    #[test]
    fn typo_is_corrected_before_resolution() {
        let intent = parse_command("attak goblin");
        assert_eq!(intent.action, Action::Attack);
        assert_eq!(intent.target.as_deref(), Some("goblin"));
    }

    #[test]
    fn history_records_recognized_verbs() {
        let mut parser = CommandParser::default();
        parser.parse("Attack goblin");
        parser.parse("n");
        parser.parse("where am i");
        parser.parse("poke stick");
        parser.parse("");
        assert_eq!(parser.history().iter().collect::<Vec<_>>(), vec!["attack", "n"]);

        parser.clear_history();
        assert!(parser.history().is_empty());
    }

    #[test]
    fn corrected_verb_is_recorded() {
        let mut parser = CommandParser::default();
        parser.parse("inventroy");
        assert!(parser.history().contains("inventory"));
    }

    #[test]
    fn parse_sentence_leaves_history_alone() {
        let parser = CommandParser::default();
        parser.parse_sentence("attack goblin");
        assert!(parser.history().is_empty());
    }

    #[test]
    fn history_capacity_follows_config() {
        let parser = CommandParser::with_config(
            Vocabulary::default(),
            ParserConfig::default().with_history_capacity(3),
        );
        assert_eq!(parser.history().capacity(), 3);
    }

    #[test]
    fn disabled_correction_falls_back() {
        let parser = CommandParser::with_config(
            Vocabulary::default(),
            ParserConfig::default().with_typo_correction(false),
        );
        assert!(parser.parse_sentence("attak goblin").fallback);
    }

    #[test]
    fn custom_commands_take_a_target() {
        let parser = CommandParser::new(
            Vocabulary::default().with_command(CustomCommand::new("cast").with_alias("invoke")),
        );
        let intent = parser.parse_sentence("invoke fireball");
        assert_eq!(intent.action, Action::Custom("cast".to_string()));
        assert_eq!(intent.target.as_deref(), Some("fireball"));
    }

    #[test]
    fn extended_directions() {
        let parser =
            CommandParser::new(Vocabulary::default().with_direction("upstairs", Direction::Up));
        assert_eq!(
            parser.parse_sentence("upstairs"),
            Intent::movement(Direction::Up)
        );
    }
}
