//! Rolling buffer of recently accepted verbs.

use std::collections::VecDeque;

/// Bounded history of accepted verb tokens, oldest first.
///
/// Once full, every push evicts the oldest entry. A capacity of zero keeps
/// nothing. The history is plain data with no interior locking; a host that
/// shares one between threads must serialize access itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(20)
    }
}

impl CommandHistory {
    /// Create an empty history holding at most `capacity` verbs.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a verb, evicting the oldest if the history is full.
    pub fn push(&mut self, verb: impl Into<String>) {
        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(verb.into().to_lowercase());
    }

    /// How recently a verb was used: `Some(0)` for the latest entry.
    pub fn recency(&self, verb: &str) -> Option<usize> {
        self.entries.iter().rev().position(|v| v == verb)
    }

    /// Whether the verb appears anywhere in the history.
    pub fn contains(&self, verb: &str) -> bool {
        self.recency(verb).is_some()
    }

    /// Iterate verbs from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Forget everything (new game).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Maximum number of verbs kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of verbs currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
