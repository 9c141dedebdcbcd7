//! Three-valued flag.

use super::ParseError;

/// A boolean that can also be "not specified".
///
/// Overrides rely on the distinction between `Unknown` (leave the parsed value
/// alone) and `False` (force the flag off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TriState {
    #[default]
    Unknown,
    True,
    False,
}

impl TriState {
    /// Whether the flag is explicitly set to true.
    pub fn is_true(self) -> bool {
        self == TriState::True
    }

    /// Whether the flag carries a value.
    pub fn is_set(self) -> bool {
        self != TriState::Unknown
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::True
        } else {
            TriState::False
        }
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        value.map_or(TriState::Unknown, TriState::from)
    }
}

impl std::fmt::Display for TriState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TriState::Unknown => write!(f, "unknown"),
            TriState::True => write!(f, "true"),
            TriState::False => write!(f, "false"),
        }
    }
}

impl std::str::FromStr for TriState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "unknown" => Ok(TriState::Unknown),
            "true" | "yes" | "1" => Ok(TriState::True),
            "false" | "no" | "0" => Ok(TriState::False),
            _ => Err(ParseError::invalid("flag", s)),
        }
    }
}
