//! The synonym table: surface verb phrases to canonical actions.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::direction::{Direction, DirectionTable};
use crate::error::{VocabularyError, VocabularyResult};

/// Longest verb phrase (in words) the synonym table accepts.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Words that open a question ("where am i", "who is here").
const INTERROGATIVES: &[&str] = &["where", "who", "what", "why", "how", "when", "which"];

/// Built-in verb phrases, grouped by action.
const DEFAULT_SYNONYMS: &[(Action, &[&str])] = &[
    (
        Action::Move,
        &["go", "move", "walk", "head", "travel", "enter", "exit", "climb"],
    ),
    (
        Action::Look,
        &["look", "l", "x", "examine", "inspect", "check", "look around", "look at"],
    ),
    (Action::Search, &["search", "look for"]),
    (Action::Read, &["read"]),
    (Action::Get, &["get", "take", "grab", "pick", "pick up"]),
    (Action::Drop, &["drop", "leave", "discard", "put down"]),
    (Action::Put, &["put", "place", "insert"]),
    (Action::Inventory, &["inventory", "inv", "i", "items"]),
    (Action::Equip, &["equip", "wear", "wield"]),
    (Action::Unequip, &["unequip", "remove", "take off"]),
    (Action::Attack, &["attack", "fight", "kill", "hit", "strike"]),
    (Action::Flee, &["flee", "escape", "retreat", "run", "run away"]),
    (
        Action::Talk,
        &["talk", "speak", "chat", "ask", "talk to", "speak to", "chat with"],
    ),
    (Action::Give, &["give", "offer", "hand"]),
    (
        Action::Trade,
        &["trade", "barter", "buy", "sell", "trade with", "barter with"],
    ),
    (Action::Eat, &["eat", "consume", "devour"]),
    (Action::Drink, &["drink", "sip", "quaff"]),
    (Action::Use, &["use", "utilize", "activate", "apply"]),
    (Action::Open, &["open", "unlock"]),
    (Action::Close, &["close", "shut", "lock"]),
    (Action::Status, &["status", "stats", "condition", "health"]),
    (Action::Help, &["help", "h", "?", "commands"]),
    (Action::Quests, &["quests", "missions", "objectives"]),
    (Action::Recruit, &["recruit", "hire", "invite"]),
    (Action::Dismiss, &["dismiss", "fire"]),
    (Action::Party, &["party", "companions", "group"]),
    (Action::PartyOrder, &["order", "tell", "command"]),
    (Action::Gather, &["gather", "regroup"]),
    (Action::Quit, &["quit", "q", "bye"]),
];

/// A verb added by a mod or script, with its aliases and help line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomCommand {
    /// Primary verb; also the name of the resulting [`Action::Custom`].
    pub verb: String,
    /// Alternative phrases that resolve to the same command.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// One-line description for the help listing.
    #[serde(default)]
    pub help: Option<String>,
    /// Leave the command out of the help listing.
    #[serde(default)]
    pub hidden: bool,
}

impl CustomCommand {
    /// Create a command with no aliases.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            aliases: Vec::new(),
            help: None,
            hidden: false,
        }
    }

    /// Add an alias.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Set the help line.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Hide the command from help output.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// The action this command resolves to. A verb that names a built-in
    /// action resolves to that action, not to [`Action::Custom`].
    pub fn action(&self) -> Action {
        Action::from(normalize_phrase(&self.verb))
    }
}

/// Normalize a phrase to lowercase words separated by single spaces.
pub(crate) fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Validate a verb phrase and return its lookup key.
fn synonym_key(phrase: &str, action: &Action) -> VocabularyResult<String> {
    let key = normalize_phrase(phrase);
    if key.is_empty() {
        return Err(VocabularyError::EmptyPhrase(action.to_string()));
    }
    if key.split(' ').count() > MAX_PHRASE_WORDS {
        return Err(VocabularyError::PhraseTooLong {
            phrase: key,
            max: MAX_PHRASE_WORDS,
        });
    }
    if matches!(action, Action::Nothing) {
        return Err(VocabularyError::ReservedAction(key));
    }
    Ok(key)
}

/// The static vocabulary the parser resolves verbs and directions against.
///
/// Built once and shared read-only by every parse. Extend it through the
/// builder methods or [`Vocabulary::extend_from_file`](Self::extend_from_file)
/// before handing it to a [`CommandParser`](crate::CommandParser).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    synonyms: BTreeMap<String, Action>,
    directions: DirectionTable,
    commands: Vec<CustomCommand>,
    interrogatives: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        let synonyms = DEFAULT_SYNONYMS
            .iter()
            .flat_map(|(action, phrases)| {
                phrases
                    .iter()
                    .map(move |phrase| (phrase.to_string(), action.clone()))
            })
            .collect();
        Self {
            synonyms,
            directions: DirectionTable::default(),
            commands: Vec::new(),
            interrogatives: INTERROGATIVES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Vocabulary {
    /// A vocabulary with no verbs, no directions and no question words.
    pub fn empty() -> Self {
        Self {
            synonyms: BTreeMap::new(),
            directions: DirectionTable::empty(),
            commands: Vec::new(),
            interrogatives: BTreeSet::new(),
        }
    }

    /// Add a verb phrase. Invalid phrases are skipped with a warning.
    pub fn with_synonym(mut self, phrase: &str, action: Action) -> Self {
        if let Err(e) = self.insert_synonym(phrase, action) {
            tracing::warn!("skipping synonym {phrase:?}: {e}");
        }
        self
    }

    /// Add a direction alias.
    pub fn with_direction(mut self, alias: &str, direction: Direction) -> Self {
        self.directions.insert(alias, direction);
        self
    }

    /// Register a custom command. Invalid aliases are skipped with a warning.
    pub fn with_command(mut self, command: CustomCommand) -> Self {
        if let Err(e) = self.register_command(command) {
            tracing::warn!("skipping custom command: {e}");
        }
        self
    }

    /// Add a verb phrase, replacing any earlier mapping of the same phrase.
    pub fn insert_synonym(&mut self, phrase: &str, action: Action) -> VocabularyResult<()> {
        let key = synonym_key(phrase, &action)?;
        tracing::trace!(phrase = %key, %action, "synonym registered");
        self.synonyms.insert(key, action);
        Ok(())
    }

    /// Add a direction alias.
    pub fn insert_direction(&mut self, alias: &str, direction: Direction) {
        self.directions.insert(alias, direction);
    }

    /// Register a custom command and all of its aliases.
    ///
    /// Every phrase is checked before any is inserted, so a command with a
    /// bad alias leaves the vocabulary untouched.
    pub fn register_command(&mut self, command: CustomCommand) -> VocabularyResult<()> {
        let action = command.action();
        if !action.is_custom() {
            return Err(VocabularyError::ReservedCommand(action.to_string()));
        }
        let keys = std::iter::once(&command.verb)
            .chain(&command.aliases)
            .map(|phrase| synonym_key(phrase, &action))
            .collect::<VocabularyResult<Vec<_>>>()?;
        for key in keys {
            tracing::trace!(phrase = %key, %action, "command phrase registered");
            self.synonyms.insert(key, action.clone());
        }
        self.commands.retain(|c| c.action() != action);
        self.commands.push(command);
        Ok(())
    }

    /// Resolve the longest verb phrase at the start of `words`.
    ///
    /// Returns the action and how many words the phrase used. Phrases of
    /// three words are tried before two, and two before one.
    pub fn lookup_phrase<S: AsRef<str>>(&self, words: &[S]) -> Option<(Action, usize)> {
        let longest = words.len().min(MAX_PHRASE_WORDS);
        (1..=longest).rev().find_map(|len| {
            let phrase = words[..len]
                .iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect::<Vec<_>>()
                .join(" ");
            self.synonyms.get(&phrase).map(|action| (action.clone(), len))
        })
    }

    /// Resolve a single verb word.
    pub fn action_for(&self, word: &str) -> Option<&Action> {
        self.synonyms.get(&word.to_lowercase())
    }

    /// Resolve a direction word.
    pub fn direction(&self, word: &str) -> Option<Direction> {
        self.directions.lookup(word)
    }

    /// The direction table.
    pub fn directions(&self) -> &DirectionTable {
        &self.directions
    }

    /// Whether the word opens a question.
    pub fn is_interrogative(&self, word: &str) -> bool {
        self.interrogatives.contains(&word.to_lowercase())
    }

    /// Whether the word can start a recognized sentence as-is.
    pub fn is_known_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.synonyms.contains_key(&word)
            || self.leading_words().any(|w| w == word)
            || self.directions.contains(&word)
            || self.interrogatives.contains(&word)
    }

    /// Candidate words for typo correction: every verb word and every
    /// direction name of three letters or more.
    pub fn correction_candidates(&self) -> BTreeSet<&str> {
        self.leading_words()
            .chain(
                self.directions
                    .iter()
                    .map(|(alias, _)| alias)
                    .filter(|alias| alias.chars().count() >= 3),
            )
            .collect()
    }

    /// All phrases mapped to an action, alphabetically.
    pub fn phrases_for(&self, action: &Action) -> Vec<&str> {
        self.synonyms
            .iter()
            .filter(|(_, a)| *a == action)
            .map(|(phrase, _)| phrase.as_str())
            .collect()
    }

    /// Iterate `(phrase, action)` pairs alphabetically by phrase.
    pub fn synonyms(&self) -> impl Iterator<Item = (&str, &Action)> {
        self.synonyms.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Registered custom commands.
    pub fn commands(&self) -> &[CustomCommand] {
        &self.commands
    }

    /// Number of verb phrases.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Whether there are no verb phrases.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }

    /// Render the player-facing command reference.
    pub fn help_text(&self) -> String {
        let mut out = String::from("Available commands:\n");
        for action in Action::BUILTIN.iter().filter(|a| **a != Action::Question) {
            let phrases = self.phrases_for(action);
            if phrases.is_empty() {
                continue;
            }
            out.push_str(&format!("  {:<12} {}\n", action.name(), phrases.join(", ")));
        }

        let visible: Vec<_> = self.commands.iter().filter(|c| !c.hidden).collect();
        if !visible.is_empty() {
            out.push_str("\nCustom commands:\n");
            for command in visible {
                let help = command.help.as_deref().unwrap_or("Custom command");
                if command.aliases.is_empty() {
                    out.push_str(&format!("  {} - {}\n", command.verb, help));
                } else {
                    out.push_str(&format!(
                        "  {} ({}) - {}\n",
                        command.verb,
                        command.aliases.join(", "),
                        help
                    ));
                }
            }
        }

        let compass: Vec<_> = Direction::ALL
            .iter()
            .filter(|d| d.is_compass())
            .map(|d| d.name())
            .collect();
        out.push_str(&format!("\nDirections: {}\n", compass.join(", ")));
        out
    }

    fn leading_words(&self) -> impl Iterator<Item = &str> {
        self.synonyms
            .keys()
            .filter_map(|phrase| phrase.split(' ').next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_phrase_wins() {
        let vocab = Vocabulary::default();
        assert_eq!(
            vocab.lookup_phrase(&["take", "off", "boots"]),
            Some((Action::Unequip, 2))
        );
        assert_eq!(
            vocab.lookup_phrase(&["take", "sword"]),
            Some((Action::Get, 1))
        );
        assert_eq!(
            vocab.lookup_phrase(&["Look", "FOR", "gold"]),
            Some((Action::Search, 2))
        );
    }

    #[test]
    fn unknown_phrase() {
        let vocab = Vocabulary::default();
        assert_eq!(vocab.lookup_phrase(&["poke", "stick"]), None);
        assert_eq!(vocab.lookup_phrase::<&str>(&[]), None);
    }

    #[test]
    fn empty_vocabulary_finds_nothing() {
        let vocab = Vocabulary::empty();
        assert!(vocab.is_empty());
        assert_eq!(vocab.lookup_phrase(&["look"]), None);
        assert!(vocab.correction_candidates().is_empty());
        assert!(!vocab.is_known_word("north"));
    }

    #[test]
    fn rejects_bad_phrases() {
        let mut vocab = Vocabulary::empty();
        assert!(matches!(
            vocab.insert_synonym("   ", Action::Look),
            Err(VocabularyError::EmptyPhrase(_))
        ));
        assert!(matches!(
            vocab.insert_synonym("one two three four", Action::Look),
            Err(VocabularyError::PhraseTooLong { .. })
        ));
        assert!(vocab.insert_synonym("peer", Action::Nothing).is_err());
        assert!(vocab.is_empty());
    }

    #[test]
    fn builder_adds_synonyms() {
        let vocab = Vocabulary::default()
            .with_synonym("Peer  At", Action::Look)
            .with_synonym("", Action::Look);
        assert_eq!(vocab.lookup_phrase(&["peer", "at", "x"]), Some((Action::Look, 2)));
        assert_eq!(vocab.len(), Vocabulary::default().len() + 1);
    }

    #[test]
    fn custom_command_registers_aliases() {
        let vocab = Vocabulary::default().with_command(
            CustomCommand::new("dance")
                .with_alias("boogie")
                .with_help("Dance a little jig"),
        );
        let dance = Action::Custom("dance".to_string());
        assert_eq!(vocab.action_for("boogie"), Some(&dance));
        assert_eq!(vocab.commands().len(), 1);
        assert!(vocab.help_text().contains("dance (boogie) - Dance a little jig"));
    }

    #[test]
    fn bad_alias_rejects_the_whole_command() {
        let before = Vocabulary::default();
        let mut vocab = before.clone();
        let err = vocab
            .register_command(CustomCommand::new("dance").with_alias("do the funky chicken"))
            .unwrap_err();
        assert!(matches!(err, VocabularyError::PhraseTooLong { .. }));
        assert_eq!(vocab, before);
        assert_eq!(vocab.action_for("dance"), None);

        let vocab = Vocabulary::default()
            .with_command(CustomCommand::new("dance").with_alias("do the funky chicken"));
        assert!(!vocab.is_known_word("dance"));
        assert!(vocab.commands().is_empty());
        assert!(!vocab.help_text().contains("dance"));
    }

    #[test]
    fn builtin_names_cannot_be_custom_commands() {
        let mut vocab = Vocabulary::default();
        for verb in ["none", "Attack", "party_order"] {
            let err = vocab.register_command(CustomCommand::new(verb)).unwrap_err();
            assert!(matches!(err, VocabularyError::ReservedCommand(_)), "{verb}");
        }
        assert!(vocab.commands().is_empty());
        assert_eq!(vocab, Vocabulary::default());
    }

    #[test]
    fn custom_command_action_survives_json() {
        let action = CustomCommand::new("  Cast   Spell ").action();
        assert_eq!(action, Action::Custom("cast spell".to_string()));
        let json = serde_json::to_string(&action).unwrap();
        let back: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(back, action);
        assert_eq!(CustomCommand::new("none").action(), Action::Nothing);
    }

    #[test]
    fn hidden_commands_stay_out_of_help() {
        let vocab = Vocabulary::default().with_command(CustomCommand::new("xyzzy").hidden());
        assert!(vocab.is_known_word("xyzzy"));
        assert!(!vocab.help_text().contains("xyzzy"));
    }

    #[test]
    fn known_words_include_phrase_heads() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_known_word("pick"));
        assert!(vocab.is_known_word("NE"));
        assert!(vocab.is_known_word("where"));
        assert!(!vocab.is_known_word("attak"));
    }

    #[test]
    fn correction_candidates_skip_short_directions() {
        let vocab = Vocabulary::default();
        let candidates = vocab.correction_candidates();
        assert!(candidates.contains("attack"));
        assert!(candidates.contains("north"));
        assert!(!candidates.contains("ne"));
    }

    #[test]
    fn help_lists_builtin_actions() {
        let help = Vocabulary::default().help_text();
        assert!(help.starts_with("Available commands:"));
        assert!(help.contains("party_order"));
        assert!(help.contains("Directions: north, south, east, west"));
        assert!(!help.contains("Custom commands"));
    }
}
