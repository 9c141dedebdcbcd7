use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,

    #[serde(default)]
    pub tvdb: TvdbConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TmdbConfig {
    /// TMDB v3 API key
    #[serde(default)]
    pub api_key: String,

    /// Language of returned titles, e.g. "en-US" or "de-DE"
    #[serde(default = "default_language")]
    pub language: String,

    /// API root override, e.g. for a caching proxy
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: default_language(),
            base_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TvdbConfig {
    /// TVDB v4 project API key
    #[serde(default)]
    pub api_key: String,

    /// Subscriber PIN, only needed for user-supported keys
    #[serde(default)]
    pub pin: Option<String>,

    /// API root override
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Provider used for TV show lookups (movies always use TMDB)
    #[serde(default)]
    pub tv_provider: TvProvider,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TvProvider {
    #[default]
    Tvdb,
    Tmdb,
}

impl std::fmt::Display for TvProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TvProvider::Tvdb => write!(f, "tvdb"),
            TvProvider::Tmdb => write!(f, "tmdb"),
        }
    }
}
