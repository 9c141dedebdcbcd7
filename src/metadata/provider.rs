//! Trait definition and types for metadata providers.
//!
//! This module defines the [`MetadataProvider`] trait that the TMDB and TVDB
//! backends implement, along with the search result they return.

use async_trait::async_trait;
use plexname_parser::LookupResult;
use serde::{Deserialize, Serialize};

/// A single result returned from a metadata search query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// Display title of the item.
    pub title: String,
    /// Release or premiere year, `0` if unknown.
    pub year: u16,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl std::fmt::Display for SearchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year > 0 {
            write!(f, "{} ({})", self.title, self.year)
        } else {
            write!(f, "{}", self.title)
        }
    }
}

impl From<SearchResult> for LookupResult {
    fn from(result: SearchResult) -> Self {
        LookupResult::new(result.title, result.year)
    }
}

/// Async trait that all metadata providers must implement.
///
/// Providers are shared behind an `Arc` by the searcher.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Short, lowercase identifier for this provider (e.g. `"tmdb"`).
    fn name(&self) -> &'static str;

    /// Search for movies matching `title`, optionally constrained by `year`.
    ///
    /// `page` is 1-based; `0` lets the provider use its default.
    async fn search_movie(
        &self,
        title: &str,
        year: Option<u16>,
        page: u32,
    ) -> anyhow::Result<Vec<SearchResult>>;

    /// Search for TV shows matching `title`.
    async fn search_tv(&self, title: &str) -> anyhow::Result<Vec<SearchResult>>;
}

/// Extract a four-digit year from a date string like `"2023-04-15"`.
pub(crate) fn parse_year(date: Option<&str>) -> u16 {
    date.and_then(|d| d.get(..4))
        .and_then(|y| y.parse::<u16>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_parsing() {
        assert_eq!(parse_year(Some("2023-04-15")), 2023);
        assert_eq!(parse_year(Some("1999")), 1999);
        assert_eq!(parse_year(None), 0);
        assert_eq!(parse_year(Some("")), 0);
        assert_eq!(parse_year(Some("soon")), 0);
    }

    #[test]
    fn search_result_display() {
        assert_eq!(SearchResult::new("Heat", 1995).to_string(), "Heat (1995)");
        assert_eq!(SearchResult::new("Heat", 0).to_string(), "Heat");
    }

    #[test]
    fn search_result_into_lookup() {
        let lookup: LookupResult = SearchResult::new("Heat", 1995).into();
        assert_eq!(lookup, LookupResult::new("Heat", 1995));
    }
}
