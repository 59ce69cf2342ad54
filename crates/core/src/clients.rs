//! Collaborator contracts the monitor is written against.
//!
//! Production implementations live in their own crates
//! (`rackmon-warranty`, `rackmon-wingnut`) and in the monitor's inventory
//! module; tests substitute in-memory implementations of the same traits.
//! No mocking framework is needed -- a test double is just another impl.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::server::Server;
use crate::types::{HealthScore, UnitNumber};
use crate::warranty::Warranty;

/// A physical rack: the hardware-facing source of health snapshots.
///
/// Snapshot calls are synchronous; racks report out of local state the way
/// a management controller cache would, not over a network round-trip.
pub trait Rack: Send + Sync {
    /// Stable rack identifier (e.g. `"RACK-01"`). Racks held by one monitor
    /// are unique by this id.
    fn id(&self) -> &str;

    /// Current health snapshot: one score per contained server.
    ///
    /// Keys are unique; iteration order carries no meaning. Scores are not
    /// retained by callers beyond a single monitoring pass.
    fn health(&self) -> HashMap<Server, HealthScore>;

    /// Physical slot number for a server on this rack.
    ///
    /// Returns `None` only when the server is not on the rack, which is a
    /// caller precondition violation.
    fn unit_for_server(&self, server: &Server) -> Option<UnitNumber>;
}

/// Errors from the warranty lookup service.
#[derive(Debug, thiserror::Error)]
pub enum WarrantyError {
    /// The service has no warranty record for the server. Distinct from the
    /// absent-coverage sentinel, which is a successful lookup result.
    #[error("No warranty record for server {server}")]
    NotFound { server: Server },

    /// Transport or protocol failure (network, non-2xx status, bad body).
    #[error("Warranty service error: {0}")]
    Service(String),
}

/// Warranty lookup service contract.
#[async_trait]
pub trait WarrantyClient: Send + Sync {
    /// Fetch the warranty covering `server`.
    ///
    /// A server with no specific record on file may still yield a successful
    /// result carrying [`Warranty::absent`]; `NotFound` means the service
    /// itself refused the lookup.
    async fn warranty_for_server(&self, server: &Server) -> Result<Warranty, WarrantyError>;
}

/// Errors from the replacement request service.
#[derive(Debug, thiserror::Error)]
pub enum ReplacementError {
    /// The service rejected the request (non-2xx status).
    #[error("Replacement request rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// Transport or protocol failure.
    #[error("Replacement service error: {0}")]
    Service(String),
}

/// Hardware replacement request service (Wingnut) contract.
#[async_trait]
pub trait ReplacementClient: Send + Sync {
    /// Request replacement of the unit at `unit` on rack `rack_id`.
    ///
    /// `warranty` is whatever the lookup returned for the server, the absent
    /// sentinel included. Fire-and-forget: success carries no payload.
    async fn request_replacement(
        &self,
        rack_id: &str,
        unit: UnitNumber,
        warranty: &Warranty,
    ) -> Result<(), ReplacementError>;
}
