//! TVDB metadata provider.
//!
//! Talks to the TVDB v4 API. Every request carries a bearer token obtained
//! from `POST /login`; the token is fetched lazily on the first search and
//! reused for the lifetime of the provider.

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use super::http::{push_query, RateLimitedClient};
use crate::metadata::provider::{parse_year, MetadataProvider, SearchResult};

pub const TVDB_BASE_URL: &str = "https://api4.thetvdb.com/v4";
const REQUESTS_PER_SECOND: u32 = 4;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    apikey: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pin: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TvdbEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct LoginData {
    token: String,
}

#[derive(Debug, Deserialize)]
struct TvdbSeriesResult {
    name: Option<String>,
    year: Option<String>,
    first_air_time: Option<String>,
}

impl TvdbSeriesResult {
    fn year(&self) -> u16 {
        match parse_year(self.year.as_deref()) {
            0 => parse_year(self.first_air_time.as_deref()),
            year => year,
        }
    }
}

/// TVDB metadata provider.
///
/// TVDB is only consulted for TV shows; movie searches return no results.
pub struct TvdbProvider {
    http: RateLimitedClient,
    base_url: String,
    api_key: String,
    pin: Option<String>,
    token: Mutex<Option<String>>,
}

impl TvdbProvider {
    pub fn new(api_key: String, pin: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            http: RateLimitedClient::new("tvdb", REQUESTS_PER_SECOND)?,
            base_url: TVDB_BASE_URL.to_string(),
            api_key,
            pin,
            token: Mutex::new(None),
        })
    }

    /// Point the provider at another API root (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn token(&self) -> anyhow::Result<String> {
        let mut token = self.token.lock().await;
        if let Some(token) = token.as_ref() {
            return Ok(token.clone());
        }

        let url = format!("{}/login", self.base_url);
        debug!(url = %url, "TVDB login");
        let body = LoginRequest {
            apikey: &self.api_key,
            pin: self.pin.as_deref(),
        };
        let login: TvdbEnvelope<LoginData> = self
            .http
            .send(&url, |client| client.post(&url).json(&body))
            .await
            .context("TVDB login failed")?
            .json()
            .await
            .context("failed to parse TVDB login response")?;

        *token = Some(login.data.token.clone());
        Ok(login.data.token)
    }
}

#[async_trait]
impl MetadataProvider for TvdbProvider {
    fn name(&self) -> &'static str {
        "tvdb"
    }

    async fn search_movie(
        &self,
        _title: &str,
        _year: Option<u16>,
        _page: u32,
    ) -> anyhow::Result<Vec<SearchResult>> {
        Ok(Vec::new())
    }

    async fn search_tv(&self, title: &str) -> anyhow::Result<Vec<SearchResult>> {
        let token = self.token().await?;

        let mut url = format!("{}/search", self.base_url);
        push_query(&mut url, &[("query", title), ("type", "series")]);
        debug!(url = %url, "TVDB search TV");

        let body: TvdbEnvelope<Vec<TvdbSeriesResult>> = self
            .http
            .send(&url, |client| client.get(&url).bearer_auth(&token))
            .await?
            .json()
            .await
            .context("failed to parse TVDB search response")?;

        Ok(body
            .data
            .into_iter()
            .map(|r| {
                let year = r.year();
                SearchResult::new(r.name.unwrap_or_default(), year)
            })
            .collect())
    }
}
