//! Parser configuration.

use crate::model::ParseResult;

/// Which part of a source path is parsed.
///
/// Season folders often carry the show name while the file only carries the
/// episode (or the other way around), so by default both are looked at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseMode {
    /// Parse `<parent directory name>/<file name>`.
    #[default]
    Both,
    /// Parse only the file name.
    FileOnly,
    /// Parse only the parent directory name.
    DirOnly,
}

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use plexname_parser::config::{ParseMode, ParserConfig};
/// use plexname_parser::{MediaType, ParseResult};
///
/// let config = ParserConfig::builder()
///     .mode(ParseMode::FileOnly)
///     .target_path("/media/tv")
///     .overrides(ParseResult {
///         media_type: MediaType::Tv,
///         ..Default::default()
///     })
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Which segments of the source path are parsed.
    /// Default: Both
    pub mode: ParseMode,

    /// Destination directory; its path segments are media type hints
    /// (e.g. a library rooted at `/media/tv`).
    pub target_path: Option<String>,

    /// Values that replace whatever is parsed. Unset fields are ignored.
    pub overrides: ParseResult,
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    mode: Option<ParseMode>,
    target_path: Option<String>,
    overrides: Option<ParseResult>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which segments of the source path are parsed.
    pub fn mode(mut self, mode: ParseMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the target directory used for media type hints.
    pub fn target_path(mut self, path: impl Into<String>) -> Self {
        self.target_path = Some(path.into());
        self
    }

    /// Set the override values.
    pub fn overrides(mut self, overrides: ParseResult) -> Self {
        self.overrides = Some(overrides);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            mode: self.mode.unwrap_or_default(),
            target_path: self.target_path,
            overrides: self.overrides.unwrap_or_default(),
        }
    }
}
