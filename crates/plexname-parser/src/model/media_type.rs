//! Media type enum.

use super::ParseError;

/// Type of media content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MediaType {
    /// Not yet classified
    #[default]
    Unknown,
    /// Movie/Film
    Movie,
    /// TV Series
    Tv,
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::Unknown => write!(f, "Unknown"),
            MediaType::Movie => write!(f, "Movie"),
            MediaType::Tv => write!(f, "TV"),
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unknown" => Ok(MediaType::Unknown),
            "movie" | "movies" | "film" | "filme" => Ok(MediaType::Movie),
            "tv" | "series" | "show" | "shows" => Ok(MediaType::Tv),
            _ => Err(ParseError::invalid("media type", s)),
        }
    }
}
