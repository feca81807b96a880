//! Admin API client.
//!
//! # Architecture
//!
//! - Plain JSON over HTTP with `reqwest`; the admin service is the source
//!   of truth, no local sync
//! - In-memory caching via `moka` for settings and menu reads (60 second
//!   TTL), so every page load does not hammer the admin service
//! - The configured base URL gets `/admin` appended exactly once; a URL
//!   already ending in `/admin` is used as-is
//! - A bearer token is attached when the caller has one in its session;
//!   a 401 response surfaces as [`ApiError::Unauthorized`] so middleware
//!   can turn it into a login redirect
//!
//! # Example
//!
//! ```rust,ignore
//! use pizza_box_storefront::api::ApiClient;
//!
//! let client = ApiClient::new(&config.api_base_url);
//! let settings = client.get_settings(None).await?;
//! let menu = client.get_menu(None).await?;
//! ```

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};
use url::Url;

use pizza_box_core::{MenuItem, StoreSettings};

/// Errors that can occur when calling the admin API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The admin API rejected the caller's bearer token.
    #[error("Unauthorized")]
    Unauthorized,

    /// Non-success status other than 401.
    #[error("Unexpected status {0} from admin API")]
    Status(reqwest::StatusCode),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Cached admin API responses.
#[derive(Clone)]
enum CacheEntry {
    Settings(StoreSettings),
    Menu(Vec<MenuItem>),
}

/// Client for the admin JSON API.
///
/// Cheaply cloneable; settings and menu responses are cached for 60
/// seconds.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheEntry>,
}

impl ApiClient {
    /// Create a new admin API client.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be created. This should never happen
    /// under normal circumstances as we use standard TLS configuration.
    #[must_use]
    pub fn new(api_base_url: &Url) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(60))
            .build();

        Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: admin_base_url(api_base_url.as_str()),
                cache,
            }),
        }
    }

    /// Execute a GET against the admin API and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        auth_token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.inner.base_url);

        let mut request = self.inner.client.get(&url);
        if let Some(token) = auth_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Admin API returned non-success status"
            );
            return Err(ApiError::Status(status));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get the store settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be parsed.
    /// The admin endpoint itself never 500s on settings reads, so failures
    /// here mean the admin service is unreachable.
    #[instrument(skip(self, auth_token))]
    pub async fn get_settings(&self, auth_token: Option<&str>) -> Result<StoreSettings, ApiError> {
        if let Some(CacheEntry::Settings(settings)) = self.inner.cache.get("settings").await {
            debug!("Cache hit for settings");
            return Ok(settings);
        }

        let settings: StoreSettings = self.get_json("/settings", auth_token).await?;

        self.inner
            .cache
            .insert("settings".to_string(), CacheEntry::Settings(settings.clone()))
            .await;

        Ok(settings)
    }

    /// Get the available menu items.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be parsed.
    #[instrument(skip(self, auth_token))]
    pub async fn get_menu(&self, auth_token: Option<&str>) -> Result<Vec<MenuItem>, ApiError> {
        if let Some(CacheEntry::Menu(items)) = self.inner.cache.get("menu").await {
            debug!("Cache hit for menu");
            return Ok(items);
        }

        let items: Vec<MenuItem> = self.get_json("/menu", auth_token).await?;

        self.inner
            .cache
            .insert("menu".to_string(), CacheEntry::Menu(items.clone()))
            .await;

        Ok(items)
    }
}

/// Resolve the admin API root from the configured base URL.
///
/// Appends `/admin` exactly once; a URL already ending in `/admin` is
/// used unchanged. Trailing slashes are trimmed first, so the `Url`
/// string form (which always carries one) normalizes cleanly.
fn admin_base_url(configured: &str) -> String {
    let trimmed = configured.trim_end_matches('/');
    if trimmed.ends_with("/admin") {
        trimmed.to_string()
    } else {
        format!("{trimmed}/admin")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn appends_admin_to_a_bare_origin() {
        assert_eq!(
            admin_base_url("http://127.0.0.1:3001"),
            "http://127.0.0.1:3001/admin"
        );
    }

    #[test]
    fn keeps_an_existing_admin_suffix() {
        assert_eq!(
            admin_base_url("http://127.0.0.1:3001/admin"),
            "http://127.0.0.1:3001/admin"
        );
    }

    #[test]
    fn trailing_slashes_do_not_double_the_suffix() {
        assert_eq!(
            admin_base_url("http://127.0.0.1:3001/"),
            "http://127.0.0.1:3001/admin"
        );
        assert_eq!(
            admin_base_url("http://127.0.0.1:3001/admin/"),
            "http://127.0.0.1:3001/admin"
        );
    }

    #[test]
    fn url_string_form_normalizes_cleanly() {
        // Url adds a trailing slash to bare origins
        let url = Url::parse("http://10.0.0.7:3001").unwrap();
        assert_eq!(admin_base_url(url.as_str()), "http://10.0.0.7:3001/admin");
    }

    #[test]
    fn a_host_merely_ending_in_admin_still_gets_the_suffix() {
        assert_eq!(
            admin_base_url("http://pizzaadmin:3001"),
            "http://pizzaadmin:3001/admin"
        );
    }
}
