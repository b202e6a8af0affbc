//! Document retrieval with cache busting.
//!
//! Snapshots update frequently and intermediaries cache aggressively, so
//! every request carries a fresh `v=` discriminator. There is deliberately
//! no retry and no timeout: a hung retrieval leaves its section of the page
//! unpopulated.

use std::sync::atomic::{AtomicU64, Ordering};

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use thiserror::Error;
use time::OffsetDateTime;

/// Failure taxonomy for either retrieval target.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed document: {0}")]
    Decode(String),
}

// Seeded from wall-clock time so discriminators keep increasing across
// page reloads, then bumped once per request within a session.
static FETCH_SEQ: Lazy<AtomicU64> = Lazy::new(|| {
    AtomicU64::new(OffsetDateTime::now_utc().unix_timestamp().unsigned_abs())
});

/// Append the monotonically increasing cache-bust discriminator.
pub fn cache_bust(url: &str) -> String {
    let tick = FETCH_SEQ.fetch_add(1, Ordering::Relaxed);
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}v={tick}")
}

/// Fetch and decode one JSON document.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let target = cache_bust(url);
    fetch_json_inner(&target).await
}

#[cfg(target_arch = "wasm32")]
async fn fetch_json_inner<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    use gloo_net::http::Request;

    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_json_inner<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }
    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Transport(err.to_string()))?;
    serde_json::from_str(&body).map_err(|err| FetchError::Decode(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discriminator(url: &str) -> u64 {
        url.rsplit("v=")
            .next()
            .and_then(|v| v.parse().ok())
            .expect("busted url carries a numeric discriminator")
    }

    #[test]
    fn discriminators_strictly_increase() {
        let a = discriminator(&cache_bust("data/latest.json"));
        let b = discriminator(&cache_bust("data/latest.json"));
        let c = discriminator(&cache_bust("data/history.json"));
        assert!(a < b && b < c);
    }

    #[test]
    fn separator_respects_existing_queries() {
        assert!(cache_bust("data/latest.json").contains("latest.json?v="));
        assert!(cache_bust("data/latest.json?fmt=json").contains("json&v="));
    }
}
