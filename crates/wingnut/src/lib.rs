//! REST client for Wingnut, the hardware replacement request service.
//!
//! Wraps Wingnut's HTTP API using [`reqwest`] and implements the
//! [`ReplacementClient`] contract from `rackmon-core`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rackmon_core::clients::{ReplacementClient, ReplacementError};
use rackmon_core::types::UnitNumber;
use rackmon_core::warranty::Warranty;

/// HTTP client for the Wingnut replacement service.
pub struct WingnutApi {
    client: reqwest::Client,
    api_url: String,
}

/// Wire shape of a replacement request body.
#[derive(Debug, Serialize)]
struct ReplacementRequest<'a> {
    /// Client-generated identifier so Wingnut can deduplicate retried
    /// submissions of the same request.
    request_id: String,
    rack_id: &'a str,
    unit: UnitNumber,
    warranty: &'a Warranty,
}

/// Response returned by Wingnut after accepting a replacement request.
#[derive(Debug, Deserialize)]
struct ReplacementAccepted {
    /// Server-assigned ticket identifier for the dispatched technician job.
    ticket_id: String,
}

impl WingnutApi {
    /// Create a new client for a Wingnut instance.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://wingnut.internal:8080`.
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

    /// Base HTTP URL of the Wingnut service.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl ReplacementClient for WingnutApi {
    /// Submit a replacement request via `POST /replacements`.
    ///
    /// The contract is fire-and-forget; Wingnut's ticket id is logged for
    /// diagnostics but not returned.
    async fn request_replacement(
        &self,
        rack_id: &str,
        unit: UnitNumber,
        warranty: &Warranty,
    ) -> Result<(), ReplacementError> {
        let body = ReplacementRequest {
            request_id: uuid::Uuid::new_v4().to_string(),
            rack_id,
            unit,
            warranty,
        };

        let response = self
            .client
            .post(format!("{}/replacements", self.api_url))
            .json(&body)
            .send()
            .await
            .map_err(|e| ReplacementError::Service(format!("Replacement request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReplacementError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        match response.json::<ReplacementAccepted>().await {
            Ok(accepted) => {
                tracing::info!(
                    rack_id,
                    unit,
                    ticket_id = %accepted.ticket_id,
                    "Wingnut accepted replacement request",
                );
            }
            Err(e) => {
                // Accepted but unparseable ack; the request still went through.
                tracing::warn!(rack_id, unit, error = %e, "Unreadable Wingnut ack body");
            }
        }

        Ok(())
    }
}
