//! HTTP access to `stats.nba.com`.

use std::time::Duration;

use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER},
    Client,
};
use serde_json::Value;
use tracing::debug;

use crate::{Result, BASE_URL_ENV_VAR};

#[cfg(test)]
mod tests;

/// Base path for the stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// stats.nba.com answers slowly and sometimes not at all; don't hang forever.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Request parameters, in the order they are sent.
pub type Params = Vec<(String, String)>;

/// Anything that can answer a stats GET with parsed JSON.
///
/// The pipeline is generic over this so tests can substitute canned responses.
#[allow(async_fn_in_trait)]
pub trait StatsApi {
    async fn get_json(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value>;
}

/// Headers the stats site expects from a browser; requests without them are dropped.
pub fn default_headers() -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json, text/plain, */*"));
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_str("true")?,
    );
    Ok(h)
}

/// reqwest-backed [`StatsApi`].
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers()?)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Client for `NBA_STATS_BASE_URL`, or the public API when unset.
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(BASE_URL_ENV_VAR)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| STATS_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}

impl StatsApi for StatsClient {
    async fn get_json(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, ?params, "GET");

        let v = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(v)
    }
}
