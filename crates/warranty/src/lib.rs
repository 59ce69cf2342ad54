//! REST client for the warranty lookup service.
//!
//! Wraps the warranty service's HTTP API using [`reqwest`] and implements
//! the [`WarrantyClient`] contract from `rackmon-core`.

use async_trait::async_trait;
use serde::Deserialize;

use rackmon_core::clients::{WarrantyClient, WarrantyError};
use rackmon_core::server::Server;
use rackmon_core::warranty::{CoverageLevel, Warranty};

/// HTTP client for the warranty lookup service.
pub struct WarrantyApi {
    client: reqwest::Client,
    api_url: String,
}

/// Wire shape of a warranty lookup response.
///
/// The service returns `{"id": null, "coverage": "none"}` for servers with
/// no specific record on file; that body maps to [`Warranty::absent`].
#[derive(Debug, Deserialize)]
struct WarrantyResponse {
    id: Option<String>,
    coverage: CoverageLevel,
    #[serde(default)]
    expires_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl From<WarrantyResponse> for Warranty {
    fn from(resp: WarrantyResponse) -> Self {
        match resp.id {
            Some(id) => Warranty::new(id, resp.coverage, resp.expires_at),
            None => Warranty::absent(),
        }
    }
}

impl WarrantyApi {
    /// Create a new client for the warranty service.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://warranty.internal:8080`.
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling across services).
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Base HTTP URL of the warranty service.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Map a completed HTTP response to the contract's result type.
    ///
    /// `404` is the service's "no warranty record" condition and becomes
    /// [`WarrantyError::NotFound`]; every other non-2xx status becomes
    /// [`WarrantyError::Service`].
    async fn parse_response(
        server: &Server,
        response: reqwest::Response,
    ) -> Result<Warranty, WarrantyError> {
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(WarrantyError::NotFound {
                server: server.clone(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WarrantyError::Service(format!(
                "Warranty lookup failed ({status}): {body}"
            )));
        }

        let parsed: WarrantyResponse = response
            .json()
            .await
            .map_err(|e| WarrantyError::Service(format!("Invalid warranty response body: {e}")))?;
        Ok(parsed.into())
    }
}

#[async_trait]
impl WarrantyClient for WarrantyApi {
    /// Fetch the warranty for a server via `GET /warranties/{server_id}`.
    async fn warranty_for_server(&self, server: &Server) -> Result<Warranty, WarrantyError> {
        let url = format!("{}/warranties/{}", self.api_url, server.id());

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WarrantyError::Service(format!("Warranty request failed: {e}")))?;

        let warranty = Self::parse_response(server, response).await?;

        tracing::debug!(
            server = %server,
            absent = warranty.is_absent(),
            "Warranty lookup complete",
        );

        Ok(warranty)
    }
}
