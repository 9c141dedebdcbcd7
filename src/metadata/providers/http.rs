//! Shared HTTP plumbing for the metadata providers.
//!
//! - Token-bucket rate limiting via [`governor`].
//! - Automatic retry on HTTP 429 with `Retry-After` header support (max 3 retries).
//! - 30-second request timeout.

use std::num::NonZeroU32;
use std::time::Duration;

use anyhow::Context;
use governor::{Quota, RateLimiter};
use reqwest::StatusCode;
use tracing::warn;

pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const MAX_RETRIES: u32 = 3;

pub(crate) type DirectRateLimiter = RateLimiter<
    governor::state::NotKeyed,
    governor::state::InMemoryState,
    governor::clock::DefaultClock,
>;

/// HTTP client with rate limiting and 429-retry logic.
pub(crate) struct RateLimitedClient {
    client: reqwest::Client,
    rate_limiter: DirectRateLimiter,
    provider: &'static str,
}

impl RateLimitedClient {
    pub(crate) fn new(provider: &'static str, per_second: u32) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build reqwest client")?;

        let per_second = NonZeroU32::new(per_second).unwrap_or(NonZeroU32::MIN);
        let rate_limiter = RateLimiter::direct(Quota::per_second(per_second));

        Ok(Self {
            client,
            rate_limiter,
            provider,
        })
    }

    /// Send a request built by `build`, retrying when the server answers 429.
    ///
    /// `build` is called once per attempt since a sent request cannot be reused.
    pub(crate) async fn send<F>(&self, url: &str, build: F) -> anyhow::Result<reqwest::Response>
    where
        F: Fn(&reqwest::Client) -> reqwest::RequestBuilder,
    {
        let provider = self.provider;
        let mut retries = 0u32;
        loop {
            self.rate_limiter.until_ready().await;

            let resp = build(&self.client)
                .send()
                .await
                .with_context(|| format!("{provider} request failed: {url}"))?;

            if resp.status() == StatusCode::TOO_MANY_REQUESTS && retries < MAX_RETRIES {
                retries += 1;
                let wait = retry_after(&resp).unwrap_or(1);
                warn!(
                    provider,
                    retry = retries,
                    wait_secs = wait,
                    "provider returned 429, backing off"
                );
                tokio::time::sleep(Duration::from_secs(wait)).await;
                continue;
            }

            let resp = resp
                .error_for_status()
                .with_context(|| format!("{provider} request returned error: {url}"))?;

            return Ok(resp);
        }
    }
}

fn retry_after(resp: &reqwest::Response) -> Option<u64> {
    resp.headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
}

/// Minimal percent-encoding for query parameter values.
pub(crate) fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0f) as usize]));
            }
        }
    }
    out
}

const HEX: [u8; 16] = *b"0123456789ABCDEF";

/// Append `key=value` pairs to `url`, starting the query string if needed.
pub(crate) fn push_query(url: &mut String, params: &[(&str, &str)]) {
    for (key, value) in params {
        url.push(if url.contains('?') { '&' } else { '?' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoded(value));
    }
}
