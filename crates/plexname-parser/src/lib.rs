//! # plexname-parser
//!
//! A closed-vocabulary classifier for media release names and a synthesizer
//! for Plex-style library paths.
//!
//! Release names such as `Movie.Title.1999.German.1080p.BluRay.Remux-group.mkv`
//! are split into tokens, matched against fixed dictionaries and season/episode
//! patterns, and collected into a [`ParseResult`]. Together with the canonical
//! title from a metadata lookup, [`output::PlexNamer`] then produces the target
//! directory and file name.
//!
//! ## Quick Start
//!
//! ```
//! use plexname_parser::{parse, MediaType, Resolution, Source};
//!
//! let result = parse("Movie.Title.1999.German.1080p.BluRay.Remux-group.mkv");
//!
//! assert_eq!(result.title, "movie title");
//! assert_eq!(result.year, 1999);
//! assert_eq!(result.resolution, Resolution::_1080p);
//! assert_eq!(result.source, Source::BluRay);
//! assert_eq!(result.media_type, MediaType::Movie);
//! assert_eq!(result.version_info(), "German.1080p.Blu-ray.Remux");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use plexname_parser::{MediaType, ParseResult, Parser};
//! use plexname_parser::config::{ParseMode, ParserConfig};
//!
//! let config = ParserConfig::builder()
//!     .mode(ParseMode::FileOnly)
//!     .overrides(ParseResult {
//!         year: 2004,
//!         ..Default::default()
//!     })
//!     .build();
//!
//! let parser = Parser::new(config);
//! let result = parser.parse("/downloads/Ambiguous.Title.720p/ambiguous.title.mkv");
//! assert_eq!(result.year, 2004);
//! ```

pub mod config;
pub mod dictionary;
pub mod lexer;
pub mod model;
pub mod output;

mod parser;

// Re-export main types for convenience
pub use model::{
    Language, MediaType, ParseError, ParseResult, Resolution, Source, TriState,
};
pub use output::{LookupResult, NamingError, PlexNamer, PlexPath};

pub use config::{ParseMode, ParserConfig};

/// Parse a release name into structured metadata using default settings.
///
/// No path hints and no overrides are applied. For more control, use
/// [`Parser`] with a custom [`ParserConfig`].
///
/// # Examples
///
/// ```
/// use plexname_parser::parse;
///
/// let result = parse("Some.Title.S04E01");
/// assert_eq!(result.season, 4);
/// assert_eq!(result.episode1, 1);
/// assert!(result.is_tv());
/// ```
pub fn parse(input: &str) -> ParseResult {
    parser::parse(input)
}

/// A configurable release name parser.
///
/// ```
/// use plexname_parser::{MediaType, Parser};
/// use plexname_parser::config::ParserConfig;
///
/// let config = ParserConfig::builder().target_path("/media/tv").build();
/// let parser = Parser::new(config);
///
/// let result = parser.parse("/downloads/Some Show/Pilot.mkv");
/// assert_eq!(result.media_type, MediaType::Tv);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse the release name(s) contained in a source path.
    ///
    /// Depending on [`ParseMode`], the file name, its parent directory name,
    /// or both are classified. Overrides from the configuration take
    /// precedence over everything parsed.
    pub fn parse(&self, source: &str) -> ParseResult {
        parser::parse_with_config(source, &self.config)
    }
}
