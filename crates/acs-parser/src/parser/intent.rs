//! The structured result of parsing one command line.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vocabulary::{Action, Direction, Family};

/// Which side of a trade the player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeMode {
    /// The player is buying.
    Buy,
    /// The player is selling.
    Sell,
}

/// A parsed player command, ready for the game engine to act on.
///
/// `action` is always set; blank input yields [`Action::Nothing`] and an
/// unrecognized verb yields [`Action::Look`] with `fallback` set. The other
/// fields are filled only by the actions that use them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intent {
    /// The canonical action.
    pub action: Action,
    /// Movement direction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Object phrase, articles kept verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Receiver of a give.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    /// Companion addressed by a party order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub companion: Option<String>,
    /// What the companion is told to do.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
    /// Conversation topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Original text of a question.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Indirect object ("put gem in *bag*", "use key on *door*").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indirect: Option<String>,
    /// Buy or sell, for trades that say which.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_mode: Option<TradeMode>,
    /// The verb was not recognized and the default action was substituted.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
}

impl Intent {
    /// Create an intent with only the action set.
    pub fn new(action: Action) -> Self {
        Self {
            action,
            ..Self::default()
        }
    }

    /// The intent for blank input.
    pub fn nothing() -> Self {
        Self::default()
    }

    /// The intent used when the verb is not recognized.
    pub fn unrecognized() -> Self {
        Self {
            action: Action::Look,
            fallback: true,
            ..Self::default()
        }
    }

    /// A movement intent.
    pub fn movement(direction: Direction) -> Self {
        Self {
            action: Action::Move,
            direction: Some(direction),
            ..Self::default()
        }
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Set the target.
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the recipient.
    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    /// Set the companion.
    pub fn with_companion(mut self, companion: impl Into<String>) -> Self {
        self.companion = Some(companion.into());
        self
    }

    /// Set the order.
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Set the topic.
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set the question text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the indirect object.
    pub fn with_indirect(mut self, indirect: impl Into<String>) -> Self {
        self.indirect = Some(indirect.into());
        self
    }

    /// Set the trade mode.
    pub fn with_trade_mode(mut self, mode: TradeMode) -> Self {
        self.trade_mode = Some(mode);
        self
    }

    /// Whether this is the blank-input intent.
    pub fn is_nothing(&self) -> bool {
        self.action == Action::Nothing
    }

    /// Whether the verb was recognized (not blank and not a fallback).
    pub fn is_recognized(&self) -> bool {
        !self.is_nothing() && !self.fallback
    }
}

/// Renders the intent as a command line that parses back to the same intent
/// under the default vocabulary.
impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target.as_deref();
        match self.action.family() {
            Family::Move => match (self.direction, target) {
                (Some(Direction::In), Some(t)) => write!(f, "enter {t}"),
                (Some(Direction::Out), Some(t)) => write!(f, "exit {t}"),
                (Some(Direction::Up), Some(t)) => write!(f, "climb {t}"),
                (Some(dir), Some(t)) if !dir.is_compass() => write!(f, "go {} {t}", dir.name()),
                (Some(dir), _) => f.write_str(dir.name()),
                (None, Some(t)) => write!(f, "go to {t}"),
                (None, None) => f.write_str("go"),
            },
            Family::Bare => f.write_str(if self.is_nothing() { "" } else { self.action.name() }),
            Family::Single | Family::Recruit => {
                f.write_str(self.action.name())?;
                write_opt(f, " ", target)
            }
            Family::Look => match target {
                Some(t) => write!(f, "look at {t}"),
                None => f.write_str("look"),
            },
            Family::Search => {
                f.write_str("search")?;
                write_opt(f, " for ", target)
            }
            Family::Indirect => {
                f.write_str(self.action.name())?;
                write_opt(f, " ", target)?;
                let prep = if self.action == Action::Use { " on " } else { " in " };
                write_opt(f, prep, self.indirect.as_deref())
            }
            Family::Give => {
                f.write_str("give")?;
                write_opt(f, " ", target)?;
                write_opt(f, " to ", self.recipient.as_deref())
            }
            Family::PartyOrder => {
                f.write_str("tell")?;
                write_opt(f, " ", self.companion.as_deref())?;
                write_opt(f, " to ", self.order.as_deref())
            }
            Family::Talk => {
                f.write_str("talk")?;
                write_opt(f, " to ", target)?;
                write_opt(f, " about ", self.topic.as_deref())
            }
            Family::Trade => match self.trade_mode {
                Some(TradeMode::Buy) => {
                    f.write_str("buy")?;
                    write_opt(f, " ", target)?;
                    write_opt(f, " from ", self.indirect.as_deref())
                }
                Some(TradeMode::Sell) => {
                    f.write_str("sell")?;
                    write_opt(f, " ", target)?;
                    write_opt(f, " to ", self.indirect.as_deref())
                }
                None => match (target, self.indirect.as_deref()) {
                    (Some(t), Some(i)) => write!(f, "trade {t} with {i}"),
                    (Some(t), None) => write!(f, "trade with {t}"),
                    (None, Some(i)) => write!(f, "trade with {i}"),
                    (None, None) => f.write_str("trade"),
                },
            },
            Family::Help => {
                f.write_str("help")?;
                write_opt(f, " ", self.topic.as_deref())
            }
            Family::Question => f.write_str(self.text.as_deref().unwrap_or("")),
        }
    }
}

fn write_opt(f: &mut fmt::Formatter<'_>, prefix: &str, value: Option<&str>) -> fmt::Result {
    match value {
        Some(v) => write!(f, "{prefix}{v}"),
        None => Ok(()),
    }
}
