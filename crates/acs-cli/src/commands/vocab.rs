use acs_parser::{Action, Direction, Vocabulary};
use comfy_table::{ContentArrangement, Table};

pub fn run(vocabulary: &Vocabulary, plain: bool) -> Result<(), String> {
    if plain {
        print!("{}", vocabulary.help_text());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Action", "Phrases"]);
    for action in Action::BUILTIN.iter() {
        let phrases = vocabulary.phrases_for(action);
        if !phrases.is_empty() {
            table.add_row(vec![action.to_string(), phrases.join(", ")]);
        }
    }
    for command in vocabulary.commands() {
        let phrases = vocabulary.phrases_for(&command.action());
        let help = command.help.as_deref().unwrap_or("-");
        table.add_row(vec![
            format!("{} (custom)", command.action()),
            format!("{}  {help}", phrases.join(", ")),
        ]);
    }
    println!("{table}");
    println!();

    let mut directions = Table::new();
    directions.set_content_arrangement(ContentArrangement::Dynamic);
    directions.set_header(vec!["Direction", "Aliases"]);
    for direction in Direction::ALL {
        let aliases = vocabulary.directions().aliases_of(direction);
        if !aliases.is_empty() {
            directions.add_row(vec![direction.to_string(), aliases.join(", ")]);
        }
    }
    println!("{directions}");
    println!();
    println!("  {} verb phrases", vocabulary.len());

    Ok(())
}
