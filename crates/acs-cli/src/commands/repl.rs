use std::io::{self, BufRead, Write};

use acs_parser::{Action, CommandParser};
use colored::Colorize;

pub fn run(mut parser: CommandParser, json: bool) -> Result<(), String> {
    if !json {
        println!("  {} commands, one per line.", "Parsing".bold());
        println!("  Type 'quit' or press Ctrl-D to exit.\n");
    }

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        if !json {
            print!("> ");
            io::stdout().flush().map_err(|e| e.to_string())?;
        }

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        if line.trim().is_empty() {
            continue;
        }

        let intent = parser.parse(&line);
        super::print_intent(&intent, json)?;
        if intent.action == Action::Quit {
            break;
        }
        if !json {
            println!();
        }
    }

    tracing::debug!(history = parser.history().len(), "repl finished");
    Ok(())
}
