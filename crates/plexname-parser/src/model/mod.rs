//! Data model types for parsed release information.
//!
//! This module contains the [`ParseResult`] value object and the closed
//! vocabularies it is built from.

mod language;
mod media_type;
mod quality;
mod result;
mod tri_state;

pub use language::Language;
pub use media_type::MediaType;
pub use quality::{Resolution, Source};
pub use result::ParseResult;
pub use tri_state::TriState;

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind}: {value}")]
pub struct ParseError {
    /// What was being parsed (e.g. `source`)
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseError {
    pub(crate) fn invalid(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
