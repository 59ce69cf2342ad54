//! Health incident records.

use serde::Serialize;

use crate::action::RequestAction;
use crate::server::Server;
use crate::types::UnitNumber;

/// One detected problem on one server: where it lives and what to do about it.
///
/// Immutable once constructed. Two incidents are equal iff all four fields
/// are equal, which is what makes the monitor's accumulated set idempotent
/// under re-recording. Incidents are only ever created for `Replace` and
/// `Inspect` classifications; healthy servers produce no record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HealthIncident {
    /// The affected server.
    pub server: Server,
    /// Identifier of the rack the server lives in.
    pub rack_id: String,
    /// Physical slot number within the rack, as reported by the rack.
    pub unit: UnitNumber,
    /// The classification that triggered the incident.
    pub action: RequestAction,
}

impl HealthIncident {
    pub fn new(
        server: Server,
        rack_id: impl Into<String>,
        unit: UnitNumber,
        action: RequestAction,
    ) -> Self {
        Self {
            server,
            rack_id: rack_id.into(),
            unit,
            action,
        }
    }
}
