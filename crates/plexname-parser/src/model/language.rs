//! Language enum.

use super::ParseError;
use crate::dictionary;
use crate::lexer::clean;

/// Audio language of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Language {
    #[default]
    None,
    English,
    French,
    Spanish,
    German,
    Italian,
    Danish,
    Dutch,
    Japanese,
    Cantonese,
    Mandarin,
    Russian,
    Polish,
    Vietnamese,
    Swedish,
    Norwegian,
    Finnish,
    Turkish,
    Portuguese,
    Flemish,
    Greek,
    Korean,
    Hungarian,
}

impl Language {
    /// Every variant, `None` first.
    pub const ALL: [Language; 23] = [
        Language::None,
        Language::English,
        Language::French,
        Language::Spanish,
        Language::German,
        Language::Italian,
        Language::Danish,
        Language::Dutch,
        Language::Japanese,
        Language::Cantonese,
        Language::Mandarin,
        Language::Russian,
        Language::Polish,
        Language::Vietnamese,
        Language::Swedish,
        Language::Norwegian,
        Language::Finnish,
        Language::Turkish,
        Language::Portuguese,
        Language::Flemish,
        Language::Greek,
        Language::Korean,
        Language::Hungarian,
    ];

    /// Whether a language was detected.
    pub fn is_set(self) -> bool {
        self != Language::None
    }

    /// Canonical English name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::None => "--",
            Language::English => "English",
            Language::French => "French",
            Language::Spanish => "Spanish",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::Japanese => "Japanese",
            Language::Cantonese => "Cantonese",
            Language::Mandarin => "Mandarin",
            Language::Russian => "Russian",
            Language::Polish => "Polish",
            Language::Vietnamese => "Vietnamese",
            Language::Swedish => "Swedish",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Turkish => "Turkish",
            Language::Portuguese => "Portuguese",
            Language::Flemish => "Flemish",
            Language::Greek => "Greek",
            Language::Korean => "Korean",
            Language::Hungarian => "Hungarian",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = clean(s);
        if key.is_empty() {
            return Ok(Language::None);
        }
        dictionary::LANGUAGES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| ParseError::invalid("language", s))
    }
}
