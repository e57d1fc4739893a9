use acs_parser::CommandParser;
use acs_parser::typo::{CommandHistory, suggest};
use colored::Colorize;

pub fn run(parser: &CommandParser, word: &str, history: &[String]) -> Result<(), String> {
    let mut recent = CommandHistory::new(parser.config().history_capacity);
    for verb in history {
        recent.push(verb.as_str());
    }

    if parser.vocabulary().is_known_word(word) {
        println!("  {} is already a known word", word.bold());
        return Ok(());
    }

    match suggest(word, parser.vocabulary(), &recent, parser.config()) {
        Some(suggestion) => {
            let source = if suggestion.from_history {
                " (recently used)"
            } else {
                ""
            };
            println!(
                "  {} -> {}  distance {}{}",
                word,
                suggestion.word.green().bold(),
                suggestion.distance,
                source.dimmed()
            );
        }
        None => println!("  {} {}", word, "(no correction)".yellow()),
    }
    Ok(())
}
