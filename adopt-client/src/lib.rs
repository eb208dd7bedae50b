//! Adopt HTTP Client
//!
//! A small, type-safe HTTP client for the pet adoption API.
//!
//! # Example
//!
//! ```no_run
//! use adopt_client::AdoptClient;
//! use adopt_core::dto::pet::PetFilter;
//!
//! # async fn example() -> adopt_client::Result<()> {
//! let client = AdoptClient::new("http://localhost:3000");
//!
//! let dogs = client.list_pets(&PetFilter::species("dog")).await?;
//! println!("{} dogs up for adoption", dogs.len());
//! # Ok(())
//! # }
//! ```

pub mod error;
mod pets;
mod shelters;
mod users;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::{Client, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// HTTP client for the adoption API
///
/// Methods are grouped by resource: pets, shelters and users. Each resource
/// supports list (with filters), get, create, update and delete.
#[derive(Debug, Clone)]
pub struct AdoptClient {
    /// Base URL of the API (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

/// Error body returned by the API
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl AdoptClient {
    /// Create a new client
    ///
    /// # Example
    /// ```
    /// use adopt_client::AdoptClient;
    ///
    /// let client = AdoptClient::new("http://localhost:3000");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;

        url.path_segments_mut()
            .map_err(|_| {
                ClientError::InvalidUrl(format!("{} cannot be a base URL", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Check the status code, then deserialize the JSON body
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle a response that carries no content (e.g., DELETE operations)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        Self::check_status(response).await.map(|_| ())
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        tracing::debug!("API returned {}: {}", status, message);

        Err(ClientError::api_error(status.as_u16(), message))
    }
}
