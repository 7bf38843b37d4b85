//! PokeAPI REST client with pagination and timeout handling.
//!
//! # Responsibilities
//! - Fetch the paginated berry listing, following next links until exhausted
//! - Fetch per-berry detail records by name
//! - Normalize berry names and reject empty ones before any network call
//! - Surface transport and decode failures as typed errors

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::pokeapi::types::{
    Berry, NamedResource, PokeApiConfig, PokeApiError, PokeApiResult, ResourcePage,
};

/// HTTP client for the upstream PokeAPI.
///
/// Cloning is cheap and shares the underlying connection pool; one instance
/// is created at startup and lives for the whole process.
#[derive(Clone)]
pub struct PokeApiClient {
    /// Underlying HTTP client; owns the connection pool and the timeout.
    http: reqwest::Client,
    /// Base URL, normalized to end with a slash so relative joins keep the path.
    base_url: Url,
}

impl PokeApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &PokeApiConfig) -> PokeApiResult<Self> {
        let base_url = normalize_base_url(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("berry-stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        tracing::info!(
            base_url = %base_url,
            timeout_secs = config.timeout_secs,
            "PokeAPI client initialized"
        );

        Ok(Self { http, base_url })
    }

    /// Fetch every berry reference, following pagination until `next` is null.
    ///
    /// Listing order is preserved exactly. Any failing page aborts the whole
    /// operation; no partial listing is ever returned.
    pub async fn list_berries(&self) -> PokeApiResult<Vec<NamedResource>> {
        let mut berries = Vec::new();
        let mut next_url = Some(self.endpoint_url("berry")?);

        while let Some(url) = next_url {
            let page: ResourcePage = self.get_json(url).await?;
            berries.extend(page.results);
            next_url = match page.next {
                Some(link) => Some(self.reduce_next_link(&link)?),
                None => None,
            };
        }

        Ok(berries)
    }

    /// Fetch the detail record for one berry.
    ///
    /// The name is trimmed and lowercased first; an empty result fails
    /// without touching the network.
    pub async fn get_berry(&self, name: &str) -> PokeApiResult<Berry> {
        let normalized = name.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(PokeApiError::EmptyName);
        }

        let url = self.endpoint_url(&format!("berry/{normalized}"))?;
        self.get_json(url).await
    }

    /// Issue one GET and decode the JSON body; non-2xx statuses are failures.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> PokeApiResult<T> {
        tracing::debug!(url = %url, "Requesting PokeAPI endpoint");
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }

    /// Join a relative endpoint path onto the base URL.
    fn endpoint_url(&self, path: &str) -> PokeApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|source| PokeApiError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                source,
            })
    }

    /// Reduce an absolute next-page link to its path and query, re-rooted on
    /// the configured base. Scheme and host always come from configuration.
    fn reduce_next_link(&self, link: &str) -> PokeApiResult<Url> {
        let absolute = Url::parse(link).map_err(|source| PokeApiError::InvalidNextLink {
            link: link.to_string(),
            source,
        })?;

        let mut target = self.base_url.clone();
        target.set_path(absolute.path());
        target.set_query(absolute.query());
        Ok(target)
    }
}

/// Parse the configured base URL, guaranteeing a single trailing slash.
fn normalize_base_url(raw: &str) -> PokeApiResult<Url> {
    let mut text = raw.trim_end_matches('/').to_string();
    text.push('/');
    Url::parse(&text).map_err(|source| PokeApiError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}
