//! Lookup facade used by the renamer.
//!
//! Routes movie and TV queries to their providers, narrows TV candidates by
//! year, lets the user pick when several candidates remain and remembers
//! the pick for later files of the same release.

use std::sync::Arc;

use dashmap::DashMap;
use plexname_parser::{MediaType, ParseResult};
use tracing::{debug, warn};

use super::provider::{MetadataProvider, SearchResult};
use super::providers::{TmdbProvider, TvdbProvider};
use crate::config::{Config, TvProvider};
use crate::prompt::{PromptError, Prompter};

/// Out-of-range answers are re-asked this many times before giving up.
const MAX_PROMPT_ATTEMPTS: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("no search result for {title:?}")]
    NoResult { title: String },

    #[error("can not search for {title:?}: media type is unknown")]
    UnknownMediaType { title: String },

    #[error("{provider} search failed")]
    Provider {
        provider: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Prompt(#[from] PromptError),

    #[error("no valid choice after {attempts} attempts")]
    InvalidChoice { attempts: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchKey {
    media_type: MediaType,
    title: String,
    year: u16,
}

impl SearchKey {
    fn new(result: &ParseResult) -> Self {
        Self {
            media_type: result.media_type,
            title: result.title.to_lowercase(),
            year: result.year,
        }
    }
}

pub struct Searcher {
    movies: Arc<dyn MetadataProvider>,
    tv: Arc<dyn MetadataProvider>,
    prompter: Arc<dyn Prompter>,
    cache: DashMap<SearchKey, SearchResult>,
}

impl Searcher {
    pub fn new(
        movies: Arc<dyn MetadataProvider>,
        tv: Arc<dyn MetadataProvider>,
        prompter: Arc<dyn Prompter>,
    ) -> Self {
        Self {
            movies,
            tv,
            prompter,
            cache: DashMap::new(),
        }
    }

    /// Wire up the providers selected in `config`. Movies always use TMDB.
    pub fn from_config(config: &Config, prompter: Arc<dyn Prompter>) -> anyhow::Result<Self> {
        let mut tmdb = TmdbProvider::new(config.tmdb.api_key.clone(), config.tmdb.language.clone())?;
        if let Some(url) = &config.tmdb.base_url {
            tmdb = tmdb.with_base_url(url.as_str());
        }
        let tmdb: Arc<dyn MetadataProvider> = Arc::new(tmdb);

        let tv: Arc<dyn MetadataProvider> = match config.search.tv_provider {
            TvProvider::Tmdb => tmdb.clone(),
            TvProvider::Tvdb => {
                let mut tvdb = TvdbProvider::new(config.tvdb.api_key.clone(), config.tvdb.pin.clone())?;
                if let Some(url) = &config.tvdb.base_url {
                    tvdb = tvdb.with_base_url(url.as_str());
                }
                Arc::new(tvdb)
            }
        };
        debug!(movies = tmdb.name(), tv = tv.name(), "metadata providers");

        Ok(Self::new(tmdb, tv, prompter))
    }

    /// Resolve the canonical title and year of a parsed release.
    pub async fn search(&self, result: &ParseResult) -> Result<SearchResult, SearchError> {
        let key = SearchKey::new(result);
        if let Some(hit) = self.cache.get(&key) {
            debug!(title = %result.title, "search cache hit");
            return Ok(hit.clone());
        }

        let candidates = match result.media_type {
            MediaType::Movie => self.search_movie(&result.title, result.year).await?,
            MediaType::Tv => self.search_tv(&result.title, result.year).await?,
            MediaType::Unknown => {
                return Err(SearchError::UnknownMediaType {
                    title: result.title.clone(),
                })
            }
        };

        let chosen = self.pick(&result.title, candidates).await?;
        self.cache.insert(key, chosen.clone());
        Ok(chosen)
    }

    async fn search_movie(&self, title: &str, year: u16) -> Result<Vec<SearchResult>, SearchError> {
        let year = (year > 0).then_some(year);
        self.movies
            .search_movie(title, year, 0)
            .await
            .map_err(|source| SearchError::Provider {
                provider: self.movies.name(),
                source,
            })
    }

    async fn search_tv(&self, title: &str, year: u16) -> Result<Vec<SearchResult>, SearchError> {
        let results = self
            .tv
            .search_tv(title)
            .await
            .map_err(|source| SearchError::Provider {
                provider: self.tv.name(),
                source,
            })?;
        Ok(filter_by_year(results, year))
    }

    async fn pick(
        &self,
        title: &str,
        mut candidates: Vec<SearchResult>,
    ) -> Result<SearchResult, SearchError> {
        debug!(title, count = candidates.len(), "search candidates");
        match candidates.len() {
            0 => Err(SearchError::NoResult {
                title: title.to_string(),
            }),
            1 => Ok(candidates.remove(0)),
            n => {
                warn!(title, candidates = n, "ambiguous search result");
                let question = format!("Multiple results found for {title:?}, pick one:");
                for _ in 0..MAX_PROMPT_ATTEMPTS {
                    let choice = self.ask(&question, &candidates).await?;
                    if (1..=n).contains(&choice) {
                        return Ok(candidates.swap_remove(choice - 1));
                    }
                    warn!(choice, "choice out of range (1-{n})");
                }
                Err(SearchError::InvalidChoice {
                    attempts: MAX_PROMPT_ATTEMPTS,
                })
            }
        }
    }

    /// Run the prompter on the blocking pool; it may wait on a terminal.
    async fn ask(&self, question: &str, candidates: &[SearchResult]) -> Result<usize, PromptError> {
        let prompter = Arc::clone(&self.prompter);
        let question = question.to_string();
        let candidates = candidates.to_vec();
        tokio::task::spawn_blocking(move || prompter.choose(&question, &candidates)).await?
    }
}

/// Keep TV candidates of the parsed year; a parse without year keeps all.
fn filter_by_year(results: Vec<SearchResult>, year: u16) -> Vec<SearchResult> {
    results
        .into_iter()
        .filter(|r| year == 0 || r.year == year)
        .collect()
}
