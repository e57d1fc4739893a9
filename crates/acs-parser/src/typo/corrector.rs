//! Verb typo correction by edit distance.

use strsim::levenshtein;

use super::history::CommandHistory;
use crate::config::ParserConfig;
use crate::vocabulary::Vocabulary;

/// A proposed replacement for a misspelled verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The known word to use instead.
    pub word: String,
    /// Edit distance from the original token.
    pub distance: usize,
    /// Whether the word was found in the command history.
    pub from_history: bool,
}

/// Find the closest known verb for a token that is not itself known.
///
/// Candidates are ranked by edit distance. At equal distance a verb from the
/// command history beats one that is not, then the shorter verb wins, then
/// the more recently used one, then alphabetical order. History never
/// outweighs a strictly smaller distance.
///
/// A candidate must also start with the same
/// [`shared_prefix_len`](ParserConfig::shared_prefix_len) characters as the
/// token, so "light" is not read as "fight" nor "smell" as "sell".
///
/// Returns `None` for known words, tokens too short to correct, or when no
/// candidate is within the distance limit.
pub fn suggest(
    token: &str,
    vocabulary: &Vocabulary,
    history: &CommandHistory,
    config: &ParserConfig,
) -> Option<Suggestion> {
    let token = token.to_lowercase();
    if token.is_empty() || vocabulary.is_known_word(&token) {
        return None;
    }
    let max_distance = config.max_distance_for(token.chars().count())?;

    vocabulary
        .correction_candidates()
        .into_iter()
        .filter(|candidate| shares_prefix(&token, candidate, config.shared_prefix_len))
        .filter_map(|candidate| {
            let distance = levenshtein(&token, candidate);
            (distance <= max_distance).then(|| {
                let recency = history.recency(candidate);
                let rank = (
                    distance,
                    recency.is_none(),
                    candidate.chars().count(),
                    recency.unwrap_or(usize::MAX),
                    candidate,
                );
                (rank, recency.is_some())
            })
        })
        .min()
        .map(|((distance, _, _, _, word), from_history)| Suggestion {
            word: word.to_string(),
            distance,
            from_history,
        })
}

fn shares_prefix(token: &str, candidate: &str, len: usize) -> bool {
    token.chars().take(len).eq(candidate.chars().take(len))
}

/// Correct a verb token, returning it unchanged when no suggestion applies.
pub fn correct(
    token: &str,
    vocabulary: &Vocabulary,
    history: &CommandHistory,
    config: &ParserConfig,
) -> String {
    match suggest(token, vocabulary, history, config) {
        Some(suggestion) => {
            tracing::debug!(
                from = token,
                to = %suggestion.word,
                distance = suggestion.distance,
                from_history = suggestion.from_history,
                "corrected verb"
            );
            suggestion.word
        }
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{Action, CustomCommand};

    fn fix(token: &str) -> String {
        correct(
            token,
            &Vocabulary::default(),
            &CommandHistory::default(),
            &ParserConfig::default(),
        )
    }

    #[test]
    fn single_edit_typos() {
        assert_eq!(fix("attak"), "attack");
        assert_eq!(fix("loook"), "look");
        assert_eq!(fix("nort"), "north");
        assert_eq!(fix("inventroy"), "inventory");
    }

    #[test]
    fn known_words_are_unchanged() {
        assert_eq!(fix("attack"), "attack");
        assert_eq!(fix("n"), "n");
        assert_eq!(fix("what"), "what");
    }

    #[test]
    fn far_words_pass_through() {
        assert_eq!(fix("poke"), "poke");
        assert_eq!(fix("random"), "random");
        assert_eq!(fix("xylophone"), "xylophone");
    }

    #[test]
    fn short_tokens_are_not_corrected() {
        assert_eq!(fix("zz"), "zz");
        assert_eq!(fix("sit"), "sit");
        assert_eq!(fix(""), "");
    }

    #[test]
    fn unrelated_verbs_are_not_rewritten() {
        for word in ["hello", "taste", "light", "smell", "whats", "knock"] {
            assert_eq!(fix(word), word);
        }
    }

    #[test]
    fn first_letters_must_match() {
        let config = ParserConfig::default().with_shared_prefix_len(0);
        let loose = correct(
            "light",
            &Vocabulary::default(),
            &CommandHistory::default(),
            &config,
        );
        assert_eq!(loose, "fight");
        assert_eq!(fix("light"), "light");
    }

    #[test]
    fn long_tokens_allow_two_edits() {
        assert_eq!(fix("inventroy"), "inventory");
        assert_eq!(fix("exmaine"), "examine");
        // five letters allow only one edit
        assert_eq!(fix("exmne"), "exmne");
    }

    #[test]
    fn empty_vocabulary_returns_input() {
        let result = correct(
            "attak",
            &Vocabulary::empty(),
            &CommandHistory::default(),
            &ParserConfig::default(),
        );
        assert_eq!(result, "attak");
    }

    #[test]
    fn disabled_correction_returns_input() {
        let config = ParserConfig::default().with_typo_correction(false);
        let result = correct(
            "attak",
            &Vocabulary::default(),
            &CommandHistory::default(),
            &config,
        );
        assert_eq!(result, "attak");
    }

    #[test]
    fn shorter_verb_wins_a_tie() {
        let vocab = Vocabulary::empty()
            .with_synonym("bake", Action::Use)
            .with_synonym("baker", Action::Use);
        // "bakr" is one edit from both
        let suggestion = suggest(
            "bakr",
            &vocab,
            &CommandHistory::default(),
            &ParserConfig::default(),
        )
        .unwrap();
        assert_eq!(suggestion.word, "bake");
        assert!(!suggestion.from_history);
    }

    #[test]
    fn history_breaks_ties() {
        let vocab = Vocabulary::empty()
            .with_synonym("bake", Action::Use)
            .with_synonym("baker", Action::Use);
        let mut history = CommandHistory::default();
        history.push("baker");
        let suggestion = suggest("bakr", &vocab, &history, &ParserConfig::default()).unwrap();
        assert_eq!(suggestion.word, "baker");
        assert!(suggestion.from_history);
    }

    #[test]
    fn most_recent_breaks_remaining_ties() {
        let vocab = Vocabulary::empty()
            .with_command(CustomCommand::new("cast"))
            .with_command(CustomCommand::new("cart"));
        let mut history = CommandHistory::default();
        history.push("cast");
        history.push("cart");
        let suggestion = suggest("casrt", &vocab, &history, &ParserConfig::default()).unwrap();
        assert_eq!(suggestion.word, "cart");

        history.push("cast");
        let suggestion = suggest("casrt", &vocab, &history, &ParserConfig::default()).unwrap();
        assert_eq!(suggestion.word, "cast");
    }

    #[test]
    fn history_never_beats_smaller_distance() {
        let vocab = Vocabulary::empty()
            .with_synonym("teleport", Action::Move)
            .with_synonym("telepath", Action::Talk);
        let mut history = CommandHistory::default();
        history.push("telepath");
        let suggestion = suggest("teleprt", &vocab, &history, &ParserConfig::default()).unwrap();
        assert_eq!(suggestion.word, "teleport");
        assert_eq!(suggestion.distance, 1);
        assert!(!suggestion.from_history);
    }
}
