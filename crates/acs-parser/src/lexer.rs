//! Lexical normalization of raw player input.
//!
//! Input is lowercased and split into words. Punctuation is dropped, except a
//! leading `?` which is kept as a word of its own (it is a help alias).
//! Articles are never removed here: they are part of object phrases.

use logos::Logos;

/// Politeness and filler words dropped from either end of a sentence,
/// unless they are all the sentence has.
const FILLER_WORDS: &[&str] = &["please", "kindly", "now", "then"];

/// Internal logos token, borrowing from the lowercased input.
#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"\s+")]
enum RawToken {
    #[token("?")]
    Question,

    #[regex(r#"[.,;:!"()\[\]{}]+"#)]
    Punct,

    #[regex(r#"[^\s.,;:!?"()\[\]{}]+"#)]
    Word,
}

/// Split input into lowercase words, dropping punctuation.
///
/// A `?` survives only when it is the first thing in the input.
pub fn tokenize(input: &str) -> Vec<String> {
    let lower = input.trim().to_lowercase();
    let mut words = Vec::new();
    let mut lexer = RawToken::lexer(&lower);

    while let Some(result) = lexer.next() {
        match result {
            Ok(RawToken::Word) => words.push(lexer.slice().to_string()),
            Ok(RawToken::Question) if words.is_empty() => words.push("?".to_string()),
            Ok(RawToken::Question | RawToken::Punct) | Err(()) => {}
        }
    }
    words
}

/// Tokenize input and trim filler words from both ends.
pub fn normalize(input: &str) -> Vec<String> {
    let mut words = tokenize(input);
    let is_filler = |w: &String| FILLER_WORDS.contains(&w.as_str());

    if words.iter().all(is_filler) {
        return words;
    }
    let leading = words.iter().take_while(|w| is_filler(*w)).count();
    words.drain(..leading);
    while words.last().is_some_and(is_filler) {
        words.pop();
    }
    words
}
