//! Sentence parsing: verb resolution and per-family field extraction.

mod command;
mod extract;
mod intent;
mod resolver;

pub use command::{CommandParser, parse_command};
pub use extract::{Clause, extract};
pub use intent::{Intent, TradeMode};
pub use resolver::{Resolution, resolve};
