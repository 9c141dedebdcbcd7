//! Metadata lookups that turn a parsed release title into its canonical
//! title and year.
//!
//! # Module layout
//!
//! - [`provider`] -- Trait definition and the shared search result type.
//! - [`providers`] -- TMDB and TVDB implementations.
//! - [`search`] -- The [`Searcher`] facade with caching and candidate prompting.

pub mod provider;
pub mod providers;
pub mod search;

pub use provider::{MetadataProvider, SearchResult};
pub use search::{SearchError, Searcher};
