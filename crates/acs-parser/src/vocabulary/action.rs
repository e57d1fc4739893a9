//! Canonical actions the game engine dispatches on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A canonical action identifier.
///
/// The set is closed apart from [`Action::Custom`], which carries verbs that
/// were registered at runtime through [`CustomCommand`](super::CustomCommand).
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Action {
    /// Blank input; nothing to do.
    #[default]
    Nothing,
    /// Move in a direction or to a named place.
    Move,
    /// Look around, or examine a target.
    Look,
    /// Search the area or for something.
    Search,
    /// Read a target.
    Read,
    /// Pick up an item.
    Get,
    /// Drop an item.
    Drop,
    /// Put an item somewhere.
    Put,
    /// List carried items.
    Inventory,
    /// Equip an item.
    Equip,
    /// Unequip an item.
    Unequip,
    /// Attack a target.
    Attack,
    /// Run from danger.
    Flee,
    /// Talk to a character.
    Talk,
    /// Give an item to someone.
    Give,
    /// Trade, buy or sell.
    Trade,
    /// Eat something.
    Eat,
    /// Drink something.
    Drink,
    /// Use an item.
    Use,
    /// Open or unlock something.
    Open,
    /// Close or lock something.
    Close,
    /// Show player status.
    Status,
    /// Show help.
    Help,
    /// Show quests.
    Quests,
    /// Recruit a companion.
    Recruit,
    /// Dismiss a companion.
    Dismiss,
    /// Show the party.
    Party,
    /// Order a companion to do something.
    PartyOrder,
    /// Gather the party.
    Gather,
    /// A free-form question.
    Question,
    /// Quit the game.
    Quit,
    /// A verb registered by a mod or script.
    Custom(String),
}

/// How an action's remaining words are turned into intent fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Direction or named place.
    Move,
    /// No object at all.
    Bare,
    /// The remaining words are the target.
    Single,
    /// Optional "at", then the target.
    Look,
    /// "for X" or the area.
    Search,
    /// Target plus an indirect object after in/on/with.
    Indirect,
    /// "X to Y".
    Give,
    /// "tell X to Y".
    PartyOrder,
    /// "to/with X about Y".
    Talk,
    /// "with X", or buy/sell X.
    Trade,
    /// Target, dropping a trailing "to party".
    Recruit,
    /// Optional topic.
    Help,
    /// The whole sentence is kept.
    Question,
}

impl Action {
    /// Every built-in action, in menu order.
    pub const BUILTIN: [Action; 30] = [
        Self::Move,
        Self::Look,
        Self::Search,
        Self::Read,
        Self::Get,
        Self::Drop,
        Self::Put,
        Self::Inventory,
        Self::Equip,
        Self::Unequip,
        Self::Attack,
        Self::Flee,
        Self::Talk,
        Self::Give,
        Self::Trade,
        Self::Eat,
        Self::Drink,
        Self::Use,
        Self::Open,
        Self::Close,
        Self::Status,
        Self::Help,
        Self::Quests,
        Self::Recruit,
        Self::Dismiss,
        Self::Party,
        Self::PartyOrder,
        Self::Gather,
        Self::Question,
        Self::Quit,
    ];

    /// The snake_case identifier of this action.
    pub fn name(&self) -> &str {
        match self {
            Self::Nothing => "none",
            Self::Move => "move",
            Self::Look => "look",
            Self::Search => "search",
            Self::Read => "read",
            Self::Get => "get",
            Self::Drop => "drop",
            Self::Put => "put",
            Self::Inventory => "inventory",
            Self::Equip => "equip",
            Self::Unequip => "unequip",
            Self::Attack => "attack",
            Self::Flee => "flee",
            Self::Talk => "talk",
            Self::Give => "give",
            Self::Trade => "trade",
            Self::Eat => "eat",
            Self::Drink => "drink",
            Self::Use => "use",
            Self::Open => "open",
            Self::Close => "close",
            Self::Status => "status",
            Self::Help => "help",
            Self::Quests => "quests",
            Self::Recruit => "recruit",
            Self::Dismiss => "dismiss",
            Self::Party => "party",
            Self::PartyOrder => "party_order",
            Self::Gather => "gather",
            Self::Question => "question",
            Self::Quit => "quit",
            Self::Custom(name) => name,
        }
    }

    /// The extraction family used for this action's object phrase.
    pub fn family(&self) -> Family {
        match self {
            Self::Move => Family::Move,
            Self::Nothing
            | Self::Inventory
            | Self::Flee
            | Self::Status
            | Self::Quests
            | Self::Party
            | Self::Gather
            | Self::Quit => Family::Bare,
            Self::Read
            | Self::Get
            | Self::Drop
            | Self::Equip
            | Self::Unequip
            | Self::Attack
            | Self::Eat
            | Self::Drink
            | Self::Open
            | Self::Close
            | Self::Dismiss
            | Self::Custom(_) => Family::Single,
            Self::Look => Family::Look,
            Self::Search => Family::Search,
            Self::Put | Self::Use => Family::Indirect,
            Self::Give => Family::Give,
            Self::PartyOrder => Family::PartyOrder,
            Self::Talk => Family::Talk,
            Self::Trade => Family::Trade,
            Self::Recruit => Family::Recruit,
            Self::Help => Family::Help,
            Self::Question => Family::Question,
        }
    }

    /// Whether this is a runtime-registered verb.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "none" {
            return Ok(Self::Nothing);
        }
        Ok(Self::BUILTIN
            .into_iter()
            .find(|a| a.name() == lower)
            .unwrap_or_else(|| Self::Custom(lower)))
    }
}

impl From<String> for Action {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

impl From<Action> for String {
    fn from(action: Action) -> Self {
        action.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for action in Action::BUILTIN {
            let parsed: Action = action.name().parse().unwrap();
            assert_eq!(parsed, action);
        }
    }

    #[test]
    fn unknown_name_is_custom() {
        let action: Action = "Dance".parse().unwrap();
        assert_eq!(action, Action::Custom("dance".to_string()));
        assert!(action.is_custom());
        assert_eq!(action.family(), Family::Single);
    }

    #[test]
    fn party_order_is_snake_case() {
        assert_eq!(Action::PartyOrder.to_string(), "party_order");
        assert_eq!(
            serde_json::to_string(&Action::PartyOrder).unwrap(),
            "\"party_order\""
        );
    }

    #[test]
    fn none_serializes_as_none() {
        assert_eq!(serde_json::to_string(&Action::Nothing).unwrap(), "\"none\"");
        let action: Action = serde_json::from_str("\"none\"").unwrap();
        assert_eq!(action, Action::Nothing);
    }

    #[test]
    fn families() {
        assert_eq!(Action::Give.family(), Family::Give);
        assert_eq!(Action::Inventory.family(), Family::Bare);
        assert_eq!(Action::Use.family(), Family::Indirect);
    }
}
