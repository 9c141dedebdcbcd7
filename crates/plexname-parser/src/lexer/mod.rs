//! Logos-based normalizer for release names.
//!
//! Every classifier works on the same [`Normalized`] view of its input: the
//! lower-cased name, its word tokens, and the "joined" form with all
//! separators removed (used for substring containment checks such as finding
//! `bluray` in `Blu-Ray`).

mod token;
pub use token::Token;

use logos::Logos;

/// Lower-cased, tokenized view of a release name or path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    name: String,
    joined: String,
    tokens: Vec<String>,
}

impl Normalized {
    /// Normalize the given input.
    ///
    /// Runs of characters that are neither letters nor digits act as a single
    /// separator. No empty tokens are produced.
    pub fn new(input: &str) -> Self {
        let name = input.to_lowercase();
        let tokens: Vec<String> = Token::lexer(&name)
            .filter_map(|tok| match tok {
                Ok(Token::Word(word)) => Some(word.to_string()),
                _ => None,
            })
            .collect();
        let joined = tokens.concat();
        Self {
            name,
            joined,
            tokens,
        }
    }

    /// The lower-cased input, separators intact.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The lower-cased input with every separator removed.
    pub fn joined(&self) -> &str {
        &self.joined
    }

    /// Word tokens in input order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate over the word tokens as string slices.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Whether any token equals `word` exactly.
    pub fn has_token(&self, word: &str) -> bool {
        self.words().any(|t| t == word)
    }
}

/// Strip every separator from `input` and lower-case it.
///
/// Used to compare user-supplied vocabulary (`Blu-Ray`, `WEB-DL`) against the
/// dictionaries, which are keyed by joined form.
pub fn clean(input: &str) -> String {
    Normalized::new(input).joined
}
