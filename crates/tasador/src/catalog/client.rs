use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::config::ClientConfig;

use super::domain::CategoryName;
use super::session::CatalogSession;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the parameter catalog service.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
}

/// Failures raised while fetching a category over HTTP.
#[derive(Debug, thiserror::Error)]
pub enum CatalogFetchError {
    #[error("failed to build catalog HTTP client")]
    Build(#[source] reqwest::Error),
    #[error("catalog request for '{category}' failed")]
    Transport {
        category: CategoryName,
        #[source]
        source: reqwest::Error,
    },
    #[error("catalog answered '{category}' with status {status}")]
    Status {
        category: CategoryName,
        status: StatusCode,
    },
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogFetchError> {
        let http = Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(CatalogFetchError::Build)?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, CatalogFetchError> {
        Self::new(config.catalog_url.clone())
    }

    /// Fetch one category's full value list.
    pub async fn fetch_category(
        &self,
        category: CategoryName,
    ) -> Result<Vec<String>, CatalogFetchError> {
        let url = format!("{}{}", self.base_url, category.route());
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogFetchError::Transport { category, source })?;

        if !response.status().is_success() {
            return Err(CatalogFetchError::Status {
                category,
                status: response.status(),
            });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|source| CatalogFetchError::Transport { category, source })
    }

    /// Fetch every category for a new session.
    ///
    /// The five fetches carry no ordering dependency and run concurrently. A
    /// failed fetch degrades that category to an empty value set so the form
    /// still renders; the session reports what is missing.
    pub async fn bootstrap(&self) -> CatalogSession {
        let (currencies, operation_types, countries, states, cities) = tokio::join!(
            self.fetch_or_empty(CategoryName::Currency),
            self.fetch_or_empty(CategoryName::OperationType),
            self.fetch_or_empty(CategoryName::Country),
            self.fetch_or_empty(CategoryName::State),
            self.fetch_or_empty(CategoryName::City),
        );

        CatalogSession::from_parts(currencies, operation_types, countries, states, cities)
    }

    async fn fetch_or_empty(&self, category: CategoryName) -> Vec<String> {
        match self.fetch_category(category).await {
            Ok(values) => values,
            Err(error) => {
                warn!(%category, %error, "catalog fetch failed, degrading to an empty list");
                Vec::new()
            }
        }
    }
}
