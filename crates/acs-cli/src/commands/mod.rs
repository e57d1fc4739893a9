pub mod correct;
pub mod parse;
pub mod repl;
pub mod vocab;

use std::path::Path;

use acs_parser::{Intent, Vocabulary};
use colored::Colorize;

/// The default vocabulary, extended by a vocabulary file if one is given.
pub fn load_vocabulary(path: Option<&Path>) -> Result<Vocabulary, String> {
    let mut vocabulary = Vocabulary::default();
    if let Some(path) = path {
        vocabulary
            .extend_from_file(path)
            .map_err(|e| format!("failed to load vocabulary {}: {e}", path.display()))?;
    }
    Ok(vocabulary)
}

/// Print an intent, either as pretty JSON or as an aligned field list.
fn print_intent(intent: &Intent, json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(intent).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if intent.is_nothing() {
        println!("  {}", "(nothing)".dimmed());
        return Ok(());
    }

    if intent.fallback {
        println!("  {} {}", intent.action.to_string().bold(), "(unrecognized verb)".yellow());
    } else {
        println!("  {}", intent.action.to_string().bold());
    }
    for (label, value) in fields(intent) {
        let label = format!("{label}:");
        println!("  {label:<11}{value}");
    }
    if intent.is_recognized() {
        println!("  {:<11}{}", "canonical:", intent.to_string().dimmed());
    }
    Ok(())
}

fn fields(intent: &Intent) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();
    if let Some(direction) = intent.direction {
        fields.push(("direction", direction.to_string()));
    }
    let optional = [
        ("target", &intent.target),
        ("indirect", &intent.indirect),
        ("recipient", &intent.recipient),
        ("companion", &intent.companion),
        ("order", &intent.order),
        ("topic", &intent.topic),
        ("text", &intent.text),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            fields.push((label, value.clone()));
        }
    }
    if let Some(mode) = intent.trade_mode {
        fields.push(("mode", format!("{mode:?}").to_lowercase()));
    }
    fields
}
