//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// A release name is split into maximal runs of Unicode letters/digits and
/// maximal runs of everything else. Whitespace is an ordinary separator.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of letters and digits (e.g. `movie`, `1080p`, `s01e02`)
    #[regex(r"[\p{L}\p{N}]+", |lex| lex.slice())]
    Word(&'src str),

    /// A run of separators (`.`, `-`, ` `, `/`, brackets, ...)
    #[regex(r"[^\p{L}\p{N}]+")]
    Separator,
}
