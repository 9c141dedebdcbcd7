//! Movie and TV lookups against the TMDB v3 search endpoints.
//!
//! Requests go through the shared `RateLimitedClient` at 4 per second.
//! Candidates come back best first: parsed titles are lower-case, so a
//! case-insensitive title hit plus a matching year ranks highest.

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::http::{push_query, RateLimitedClient};
use crate::metadata::provider::{parse_year, MetadataProvider, SearchResult};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const REQUESTS_PER_SECOND: u32 = 4;

// ---------------------------------------------------------------------------
// TMDB API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse<T> {
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieSearchResult {
    title: Option<String>,
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbTvSearchResult {
    name: Option<String>,
    first_air_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Provider implementation
// ---------------------------------------------------------------------------

/// TMDB metadata provider.
///
/// # Examples
///
/// ```no_run
/// use plexname::metadata::providers::TmdbProvider;
///
/// let provider = TmdbProvider::new("your-api-key".into(), "en-US".into()).unwrap();
/// ```
pub struct TmdbProvider {
    http: RateLimitedClient,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbProvider {
    /// Create a new TMDB provider with the given API key and language.
    ///
    /// The `language` parameter should be a language tag such as `"en-US"`.
    pub fn new(api_key: String, language: String) -> anyhow::Result<Self> {
        Ok(Self {
            http: RateLimitedClient::new("tmdb", REQUESTS_PER_SECOND)?,
            base_url: TMDB_BASE_URL.to_string(),
            api_key,
            language,
        })
    }

    /// Point the provider at another API root (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Build a full API URL with the API key and language query parameters.
    fn url(&self, path: &str, extra_params: &[(&str, &str)]) -> String {
        let mut url = format!("{}{path}", self.base_url);
        push_query(
            &mut url,
            &[("api_key", &self.api_key), ("language", &self.language)],
        );
        push_query(&mut url, extra_params);
        url
    }

    async fn search<T>(&self, url: &str) -> anyhow::Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let body: TmdbSearchResponse<T> = self
            .http
            .send(url, |client| client.get(url))
            .await?
            .json()
            .await
            .context("failed to parse TMDB search response")?;
        Ok(body.results)
    }

    /// Compute confidence score for a search result based on title similarity
    /// and year proximity.
    fn confidence(
        query_title: &str,
        result_title: &str,
        query_year: Option<u16>,
        result_year: u16,
    ) -> f64 {
        let base = if query_title == result_title {
            0.5
        } else if query_title.eq_ignore_ascii_case(result_title) {
            0.4
        } else if result_title
            .to_ascii_lowercase()
            .contains(&query_title.to_ascii_lowercase())
        {
            0.2
        } else {
            0.1
        };

        let year_bonus = match query_year {
            _ if result_year == 0 => 0.0,
            Some(q) if q == result_year => 0.3,
            Some(q) if q.abs_diff(result_year) <= 1 => 0.15,
            _ => 0.0,
        };

        base + year_bonus
    }

    /// Order by descending confidence; ties keep the provider's order.
    fn rank(title: &str, year: Option<u16>, results: Vec<SearchResult>) -> Vec<SearchResult> {
        let mut scored: Vec<(f64, SearchResult)> = results
            .into_iter()
            .map(|r| (Self::confidence(title, &r.title, year, r.year), r))
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(_, r)| r).collect()
    }
}

#[async_trait]
impl MetadataProvider for TmdbProvider {
    fn name(&self) -> &'static str {
        "tmdb"
    }

    async fn search_movie(
        &self,
        title: &str,
        year: Option<u16>,
        page: u32,
    ) -> anyhow::Result<Vec<SearchResult>> {
        let mut params = vec![("query", title)];
        let year_str = year.map(|y| y.to_string());
        if let Some(ref y) = year_str {
            params.push(("year", y.as_str()));
        }
        let page_str = page.to_string();
        if page > 0 {
            params.push(("page", page_str.as_str()));
        }

        let url = self.url("/search/movie", &params);
        debug!(url = %url, "TMDB search movie");

        let results = self
            .search::<TmdbMovieSearchResult>(&url)
            .await?
            .into_iter()
            .map(|r| {
                SearchResult::new(r.title.unwrap_or_default(), parse_year(r.release_date.as_deref()))
            })
            .collect();

        Ok(Self::rank(title, year, results))
    }

    async fn search_tv(&self, title: &str) -> anyhow::Result<Vec<SearchResult>> {
        let url = self.url("/search/tv", &[("query", title)]);
        debug!(url = %url, "TMDB search TV");

        let results = self
            .search::<TmdbTvSearchResult>(&url)
            .await?
            .into_iter()
            .map(|r| {
                SearchResult::new(r.name.unwrap_or_default(), parse_year(r.first_air_date.as_deref()))
            })
            .collect();

        Ok(Self::rank(title, None, results))
    }
}
