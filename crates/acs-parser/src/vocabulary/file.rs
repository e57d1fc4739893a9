//! JSON vocabulary extensions.
//!
//! A vocabulary file adds verbs, direction aliases and custom commands on top
//! of an existing [`Vocabulary`]:
//!
//! ```json
//! {
//!   "verbs": { "look": ["peer at"], "attack": ["smite"] },
//!   "directions": { "up": ["upstairs"] },
//!   "commands": [{ "verb": "dance", "aliases": ["boogie"], "help": "Dance" }]
//! }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::direction::Direction;
use super::table::{CustomCommand, Vocabulary};
use crate::error::{VocabularyError, VocabularyResult};

/// On-disk shape of a vocabulary extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VocabularyFile {
    /// Action name to extra verb phrases.
    #[serde(default)]
    pub verbs: BTreeMap<String, Vec<String>>,
    /// Direction name to extra aliases.
    #[serde(default)]
    pub directions: BTreeMap<String, Vec<String>>,
    /// Custom commands to register.
    #[serde(default)]
    pub commands: Vec<CustomCommand>,
}

impl VocabularyFile {
    /// Parse a vocabulary file from JSON text.
    pub fn from_json_str(json: &str) -> VocabularyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a vocabulary file.
    pub fn load(path: &Path) -> VocabularyResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| VocabularyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

impl Vocabulary {
    /// Apply a parsed vocabulary file.
    ///
    /// The file is applied all or nothing: on the first invalid entry the
    /// error is returned and this vocabulary is left as it was.
    pub fn extend(&mut self, file: VocabularyFile) -> VocabularyResult<()> {
        let mut next = self.clone();
        for (name, phrases) in file.verbs {
            let action = Action::from(name);
            for phrase in phrases {
                next.insert_synonym(&phrase, action.clone())?;
            }
        }
        for (name, aliases) in file.directions {
            let direction: Direction = name.parse()?;
            for alias in aliases {
                next.insert_direction(&alias, direction);
            }
        }
        for command in file.commands {
            next.register_command(command)?;
        }
        *self = next;
        Ok(())
    }

    /// Parse JSON text and apply it to this vocabulary.
    pub fn extend_from_json(&mut self, json: &str) -> VocabularyResult<()> {
        self.extend(VocabularyFile::from_json_str(json)?)
    }

    /// Load a vocabulary file and apply it to this vocabulary.
    pub fn extend_from_file(&mut self, path: &Path) -> VocabularyResult<()> {
        let file = VocabularyFile::load(path)?;
        tracing::debug!(
            path = %path.display(),
            verbs = file.verbs.len(),
            commands = file.commands.len(),
            "loaded vocabulary file"
        );
        self.extend(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_adds_verbs_and_directions() {
        let mut vocab = Vocabulary::default();
        vocab
            .extend_from_json(
                r#"{
                    "verbs": { "attack": ["smite"], "look": ["peer at"] },
                    "directions": { "up": ["upstairs"] }
                }"#,
            )
            .unwrap();
        assert_eq!(vocab.action_for("smite"), Some(&Action::Attack));
        assert_eq!(vocab.lookup_phrase(&["peer", "at"]), Some((Action::Look, 2)));
        assert_eq!(vocab.direction("upstairs"), Some(Direction::Up));
    }

    #[test]
    fn unknown_verb_names_become_custom_actions() {
        let mut vocab = Vocabulary::default();
        vocab
            .extend_from_json(r#"{ "verbs": { "pray": ["pray", "kneel"] } }"#)
            .unwrap();
        assert_eq!(
            vocab.action_for("kneel"),
            Some(&Action::Custom("pray".to_string()))
        );
    }

    #[test]
    fn commands_are_registered() {
        let mut vocab = Vocabulary::default();
        vocab
            .extend_from_json(
                r#"{ "commands": [{ "verb": "dance", "aliases": ["boogie"], "help": "Dance" }] }"#,
            )
            .unwrap();
        assert_eq!(vocab.commands().len(), 1);
        assert!(vocab.action_for("boogie").is_some_and(Action::is_custom));
    }

    #[test]
    fn unknown_direction_is_an_error() {
        let mut vocab = Vocabulary::default();
        let err = vocab
            .extend_from_json(r#"{ "directions": { "sideways": ["sw2"] } }"#)
            .unwrap_err();
        assert!(matches!(err, VocabularyError::UnknownDirection(_)));
    }

    #[test]
    fn failed_extend_changes_nothing() {
        let mut vocab = Vocabulary::default();
        let err = vocab
            .extend_from_json(
                r#"{
                    "verbs": { "attack": ["smite"] },
                    "directions": { "sideways": ["sw2"] }
                }"#,
            )
            .unwrap_err();
        assert!(matches!(err, VocabularyError::UnknownDirection(_)));
        assert_eq!(vocab.action_for("smite"), None);
        assert_eq!(vocab, Vocabulary::default());

        let err = vocab
            .extend_from_json(
                r#"{
                    "directions": { "up": ["upstairs"] },
                    "commands": [
                        { "verb": "dance" },
                        { "verb": "jig", "aliases": ["do the funky chicken"] }
                    ]
                }"#,
            )
            .unwrap_err();
        assert!(matches!(err, VocabularyError::PhraseTooLong { .. }));
        assert_eq!(vocab.direction("upstairs"), None);
        assert!(vocab.commands().is_empty());
        assert_eq!(vocab, Vocabulary::default());
    }

    #[test]
    fn none_action_is_rejected() {
        let mut vocab = Vocabulary::default();
        let err = vocab
            .extend_from_json(r#"{ "verbs": { "none": ["idle"] } }"#)
            .unwrap_err();
        assert!(matches!(err, VocabularyError::ReservedAction(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut vocab = Vocabulary::default();
        assert!(matches!(
            vocab.extend_from_json("{ not json"),
            Err(VocabularyError::Json(_))
        ));
        assert!(matches!(
            vocab.extend_from_json(r#"{ "nouns": {} }"#),
            Err(VocabularyError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut vocab = Vocabulary::default();
        let err = vocab
            .extend_from_file(&dir.path().join("missing.json"))
            .unwrap_err();
        assert!(matches!(err, VocabularyError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        std::fs::write(&path, r#"{ "verbs": { "flee": ["skedaddle"] } }"#).unwrap();
        let mut vocab = Vocabulary::default();
        vocab.extend_from_file(&path).unwrap();
        assert_eq!(vocab.action_for("skedaddle"), Some(&Action::Flee));
    }
}
