//! Compass directions and the alias table that maps player words onto them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VocabularyError;

/// Direction for movement intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Northeast.
    Northeast,
    /// Northwest.
    Northwest,
    /// Southeast.
    Southeast,
    /// Southwest.
    Southwest,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Into a place ("go in", "enter").
    In,
    /// Out of a place ("go out", "exit").
    Out,
}

impl Direction {
    /// Every direction, in table order.
    pub const ALL: [Direction; 12] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Northeast,
        Self::Northwest,
        Self::Southeast,
        Self::Southwest,
        Self::Up,
        Self::Down,
        Self::In,
        Self::Out,
    ];

    /// Get the canonical name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Northeast => "northeast",
            Self::Northwest => "northwest",
            Self::Southeast => "southeast",
            Self::Southwest => "southwest",
            Self::Up => "up",
            Self::Down => "down",
            Self::In => "in",
            Self::Out => "out",
        }
    }

    /// The built-in aliases for this direction, canonical name first.
    fn default_aliases(&self) -> &'static [&'static str] {
        match self {
            Self::North => &["north", "n"],
            Self::South => &["south", "s"],
            Self::East => &["east", "e"],
            Self::West => &["west", "w"],
            Self::Northeast => &["northeast", "ne"],
            Self::Northwest => &["northwest", "nw"],
            Self::Southeast => &["southeast", "se"],
            Self::Southwest => &["southwest", "sw"],
            Self::Up => &["up", "u"],
            Self::Down => &["down", "d"],
            Self::In => &["in", "inside"],
            Self::Out => &["out", "outside"],
        }
    }

    /// Whether this is one of the eight compass points.
    pub fn is_compass(&self) -> bool {
        !matches!(self, Self::Up | Self::Down | Self::In | Self::Out)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|d| d.default_aliases().contains(&lower.as_str()))
            .ok_or(VocabularyError::UnknownDirection(lower))
    }
}

/// Mapping from full or abbreviated direction words to canonical directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionTable {
    aliases: BTreeMap<String, Direction>,
}

impl Default for DirectionTable {
    fn default() -> Self {
        let aliases = Direction::ALL
            .iter()
            .flat_map(|dir| {
                dir.default_aliases()
                    .iter()
                    .map(move |alias| (alias.to_string(), *dir))
            })
            .collect();
        Self { aliases }
    }
}

impl DirectionTable {
    /// Create an empty table.
    pub fn empty() -> Self {
        Self {
            aliases: BTreeMap::new(),
        }
    }

    /// Register an alias, replacing any earlier mapping for the same word.
    pub fn insert(&mut self, alias: &str, direction: Direction) {
        let alias = alias.trim().to_lowercase();
        if !alias.is_empty() {
            self.aliases.insert(alias, direction);
        }
    }

    /// Look up a word (case-insensitive).
    pub fn lookup(&self, word: &str) -> Option<Direction> {
        if let Some(dir) = self.aliases.get(word) {
            return Some(*dir);
        }
        self.aliases.get(&word.to_lowercase()).copied()
    }

    /// Whether the word names a direction.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Iterate `(alias, direction)` pairs in alphabetical alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Direction)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// All aliases for one direction.
    pub fn aliases_of(&self, direction: Direction) -> Vec<&str> {
        self.iter()
            .filter(|(_, d)| *d == direction)
            .map(|(alias, _)| alias)
            .collect()
    }

    /// Number of aliases in the table.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no aliases.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
