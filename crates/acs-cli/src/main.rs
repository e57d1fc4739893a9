//! CLI frontend for the Adventure Construction Set command parser.

mod commands;

use std::path::PathBuf;
use std::process;

use acs_parser::{CommandParser, ParserConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "acs",
    about = "Adventure Construction Set: try out the command parser",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON vocabulary file that extends the default verbs and directions
    #[arg(long, global = true)]
    vocab: Option<PathBuf>,

    /// Do not correct misspelled verbs
    #[arg(long, global = true)]
    no_typo_correction: bool,

    /// How many recent verbs bias typo correction
    #[arg(long, global = true, default_value = "20")]
    history_size: usize,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a single command and print the intent
    Parse {
        /// The command words, e.g. `acs parse give gold to merchant`
        #[arg(required = true, num_args = 1..)]
        words: Vec<String>,

        /// Print the intent as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin until EOF or quit
    Repl {
        /// Print each intent as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the vocabulary: actions, phrases and directions
    Vocab {
        /// Print the player-facing help text instead of tables
        #[arg(long)]
        plain: bool,
    },

    /// Show how a misspelled verb would be corrected
    Correct {
        /// The word to correct
        word: String,

        /// Verbs to treat as recently used, oldest first
        #[arg(long, num_args = 1..)]
        history: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = build_parser(&cli).and_then(|parser| match cli.command {
        Commands::Parse { words, json } => commands::parse::run(parser, &words, json),
        Commands::Repl { json } => commands::repl::run(parser, json),
        Commands::Vocab { plain } => commands::vocab::run(parser.vocabulary(), plain),
        Commands::Correct { word, history } => commands::correct::run(&parser, &word, &history),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn build_parser(cli: &Cli) -> Result<CommandParser, String> {
    let vocabulary = commands::load_vocabulary(cli.vocab.as_deref())?;
    let config = ParserConfig::default()
        .with_typo_correction(!cli.no_typo_correction)
        .with_history_capacity(cli.history_size);
    Ok(CommandParser::with_config(vocabulary, config))
}
