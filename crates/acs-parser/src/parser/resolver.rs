//! Verb resolution: which action does a token sequence start with?

use crate::vocabulary::{Action, Direction, Vocabulary};

/// How the leading words of a sentence were resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A verb phrase from the synonym table, `len` words long.
    Phrase {
        /// The action the phrase maps to.
        action: Action,
        /// Number of words the phrase used.
        len: usize,
    },
    /// A bare direction word.
    Direction(Direction),
    /// An interrogative sentence that asks about carried items.
    Inventory,
    /// Any other interrogative sentence.
    Question,
    /// Nothing matched.
    Unrecognized,
}

impl Resolution {
    /// The action this resolution stands for. Unrecognized input resolves
    /// to [`Action::Look`].
    pub fn action(&self) -> Action {
        match self {
            Self::Phrase { action, .. } => action.clone(),
            Self::Direction(_) => Action::Move,
            Self::Inventory => Action::Inventory,
            Self::Question => Action::Question,
            Self::Unrecognized => Action::Look,
        }
    }

    /// How many leading words belong to the verb.
    pub fn verb_len(&self) -> usize {
        match self {
            Self::Phrase { len, .. } => *len,
            Self::Direction(_) => 1,
            Self::Inventory | Self::Question | Self::Unrecognized => 0,
        }
    }
}

/// Resolve the action at the start of `words`.
///
/// The synonym table is tried first, longest phrase first. Then a bare
/// direction word, then a question word. Anything else is unrecognized.
pub fn resolve<S: AsRef<str>>(words: &[S], vocabulary: &Vocabulary) -> Resolution {
    let Some(first) = words.first().map(AsRef::as_ref) else {
        return Resolution::Unrecognized;
    };

    if let Some((action, len)) = vocabulary.lookup_phrase(words) {
        tracing::trace!(%action, len, "resolved verb phrase");
        return Resolution::Phrase { action, len };
    }

    if let Some(direction) = vocabulary.direction(first) {
        return Resolution::Direction(direction);
    }

    if vocabulary.is_interrogative(first) {
        let asks_about_carrying = first.eq_ignore_ascii_case("what")
            && words[1..]
                .iter()
                .any(|w| w.as_ref().to_lowercase().starts_with("carry"));
        return if asks_about_carrying {
            Resolution::Inventory
        } else {
            Resolution::Question
        };
    }

    Resolution::Unrecognized
}
