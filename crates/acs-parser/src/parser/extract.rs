//! Field extraction, one strategy per action family.

use crate::vocabulary::{Action, Direction, Family, Vocabulary};

use super::intent::{Intent, TradeMode};

/// Verbs that imply a direction when no direction word follows them.
const IMPLIED_DIRECTIONS: &[(&str, Direction)] = &[
    ("enter", Direction::In),
    ("exit", Direction::Out),
    ("climb", Direction::Up),
];

/// Prepositions that introduce the indirect object of put/use.
const INDIRECT_PREPOSITIONS: &[&str] = &["in", "into", "inside", "on", "onto", "with"];

/// One sentence split into its resolved verb and the words after it.
#[derive(Debug, Clone, Copy)]
pub struct Clause<'a> {
    /// The resolved action.
    pub action: &'a Action,
    /// Words consumed by the verb phrase.
    pub verb: &'a [String],
    /// Everything after the verb phrase.
    pub rest: &'a [String],
    /// The vocabulary the verb was resolved against.
    pub vocabulary: &'a Vocabulary,
    /// The raw input line.
    pub input: &'a str,
}

type Extractor = fn(Clause<'_>) -> Intent;

fn extractor(family: Family) -> Extractor {
    match family {
        Family::Move => movement,
        Family::Bare => bare,
        Family::Single => single,
        Family::Look => look,
        Family::Search => search,
        Family::Indirect => indirect,
        Family::Give => give,
        Family::PartyOrder => party_order,
        Family::Talk => talk,
        Family::Trade => trade,
        Family::Recruit => recruit,
        Family::Help => help,
        Family::Question => question,
    }
}

/// Build the intent for a clause using its action family's strategy.
pub fn extract(clause: Clause<'_>) -> Intent {
    extractor(clause.action.family())(clause)
}

fn movement(clause: Clause<'_>) -> Intent {
    let verb = clause.verb.first().map(String::as_str).unwrap_or_default();
    if let Some(direction) = clause.vocabulary.direction(verb) {
        return Intent::movement(direction);
    }

    let implied = IMPLIED_DIRECTIONS
        .iter()
        .find(|(word, _)| *word == verb)
        .map(|(_, direction)| *direction);

    let (direction, object) = match clause.rest.split_first() {
        Some((word, tail)) => match clause.vocabulary.direction(word) {
            Some(direction) => (Some(direction), tail),
            None if word == "into" => (Some(Direction::In), tail),
            None if word == "to" => (implied, tail),
            None => (implied, clause.rest),
        },
        None => (implied, clause.rest),
    };

    let mut intent = Intent::new(Action::Move);
    intent.direction = direction;
    // Compass moves never carry a place name.
    if direction.is_none_or(|d| !d.is_compass()) {
        intent.target = join(object);
    }
    intent
}

fn bare(clause: Clause<'_>) -> Intent {
    Intent::new(clause.action.clone())
}

fn single(clause: Clause<'_>) -> Intent {
    with_target(clause.action, clause.rest)
}

fn look(clause: Clause<'_>) -> Intent {
    with_target(clause.action, skip_leading(clause.rest, &["at"]))
}

fn search(clause: Clause<'_>) -> Intent {
    with_target(clause.action, skip_leading(clause.rest, &["for"]))
}

fn indirect(clause: Clause<'_>) -> Intent {
    let (object, second) = split_on(clause.rest, INDIRECT_PREPOSITIONS);
    let mut intent = with_target(clause.action, object);
    intent.indirect = second.and_then(join);
    intent
}

fn give(clause: Clause<'_>) -> Intent {
    let (object, recipient) = split_on(clause.rest, &["to"]);
    let mut intent = with_target(clause.action, object);
    intent.recipient = recipient.and_then(join);
    intent
}

fn party_order(clause: Clause<'_>) -> Intent {
    let (companion, order) = split_on(clause.rest, &["to"]);
    let mut intent = Intent::new(clause.action.clone());
    intent.companion = join(companion);
    intent.order = order.and_then(join);
    intent
}

fn talk(clause: Clause<'_>) -> Intent {
    let rest = skip_leading(clause.rest, &["to", "with"]);
    let (person, topic) = split_on(rest, &["about"]);
    let mut intent = with_target(clause.action, person);
    intent.topic = topic.and_then(join);
    intent
}

fn trade(clause: Clause<'_>) -> Intent {
    let mode = match clause.verb {
        [verb] if verb == "buy" => Some(TradeMode::Buy),
        [verb] if verb == "sell" => Some(TradeMode::Sell),
        _ => None,
    };

    let (object, partner) = match mode {
        Some(_) => split_on(clause.rest, &["from", "to"]),
        None => match clause.rest.split_first() {
            Some((word, tail)) if word == "with" || word == "to" => (tail, None),
            _ => split_on(clause.rest, &["with"]),
        },
    };

    let mut intent = with_target(clause.action, object);
    intent.indirect = partner.and_then(join);
    intent.trade_mode = mode;
    intent
}

fn recruit(clause: Clause<'_>) -> Intent {
    with_target(clause.action, strip_party_suffix(clause.rest))
}

/// Drop a trailing "to party" or "to the/my/our party".
fn strip_party_suffix(words: &[String]) -> &[String] {
    let Some((last, head)) = words.split_last() else {
        return words;
    };
    if last != "party" {
        return words;
    }
    let head = match head.split_last() {
        Some((word, rest)) if ["the", "my", "our"].contains(&word.as_str()) => rest,
        _ => head,
    };
    match head.split_last() {
        Some((word, rest)) if word == "to" => rest,
        _ => words,
    }
}

fn help(clause: Clause<'_>) -> Intent {
    let mut intent = Intent::new(clause.action.clone());
    intent.topic = join(clause.rest);
    intent
}

fn question(clause: Clause<'_>) -> Intent {
    Intent::new(clause.action.clone()).with_text(clause.input.trim())
}

fn with_target(action: &Action, words: &[String]) -> Intent {
    let mut intent = Intent::new(action.clone());
    intent.target = join(words);
    intent
}

fn join(words: &[String]) -> Option<String> {
    (!words.is_empty()).then(|| words.join(" "))
}

fn skip_leading<'a>(words: &'a [String], prepositions: &[&str]) -> &'a [String] {
    match words.split_first() {
        Some((first, tail)) if prepositions.contains(&first.as_str()) => tail,
        _ => words,
    }
}

/// Split at the first connector word. The connector itself is dropped.
fn split_on<'a>(words: &'a [String], connectors: &[&str]) -> (&'a [String], Option<&'a [String]>) {
    match words.iter().position(|w| connectors.contains(&w.as_str())) {
        Some(at) => (&words[..at], Some(&words[at + 1..])),
        None => (words, None),
    }
}
