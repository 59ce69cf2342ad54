//! The rack monitor: pass execution and incident bookkeeping.

use std::collections::HashSet;
use std::sync::Arc;

use rackmon_core::action::RequestAction;
use rackmon_core::clients::{
    Rack, ReplacementClient, ReplacementError, WarrantyClient, WarrantyError,
};
use rackmon_core::incident::HealthIncident;
use rackmon_core::server::Server;
use rackmon_core::thresholds::HealthThresholds;

use crate::remediation;

/// Underlying collaborator failure carried inside [`MonitorError`].
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error(transparent)]
    Warranty(#[from] WarrantyError),

    #[error(transparent)]
    Replacement(#[from] ReplacementError),
}

/// The only error a monitoring pass can return.
///
/// Classification and incident recording never fail; a pass aborts only
/// when remediation for some server does, and the cause chain identifies
/// which collaborator failed and why.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("Remediation failed for server {server}")]
    Remediation {
        /// The server whose remediation failed.
        server: Server,
        #[source]
        source: CollaboratorError,
    },
}

/// Watches a fixed set of racks and accumulates health incidents.
///
/// The rack set, thresholds, and client handles are fixed for the monitor's
/// lifetime. The accumulated incident set is the only mutable state: it
/// grows across passes and is **never cleared automatically** -- a caller
/// that wants a fresh ledger constructs a fresh monitor. One pass runs to
/// completion (or aborts on a remediation error) before control returns;
/// concurrent passes against the same instance are not supported.
pub struct RackMonitor {
    thresholds: HealthThresholds,
    racks: Vec<Arc<dyn Rack>>,
    warranty_client: Arc<dyn WarrantyClient>,
    replacement_client: Arc<dyn ReplacementClient>,
    incidents: HashSet<HealthIncident>,
}

impl RackMonitor {
    /// Create a monitor over `racks` with validated `thresholds`.
    ///
    /// Racks are deduplicated by [`Rack::id`]; the first occurrence of an
    /// id wins and duplicates are logged and dropped. Threshold validation
    /// happens at [`HealthThresholds::new`], so a misconfigured monitor
    /// cannot be constructed in the first place.
    pub fn new(
        racks: Vec<Arc<dyn Rack>>,
        warranty_client: Arc<dyn WarrantyClient>,
        replacement_client: Arc<dyn ReplacementClient>,
        thresholds: HealthThresholds,
    ) -> Self {
        let mut seen = HashSet::with_capacity(racks.len());
        let mut unique: Vec<Arc<dyn Rack>> = Vec::with_capacity(racks.len());
        for rack in racks {
            if seen.insert(rack.id().to_string()) {
                unique.push(rack);
            } else {
                tracing::warn!(rack_id = rack.id(), "Dropping duplicate rack");
            }
        }

        Self {
            thresholds,
            racks: unique,
            warranty_client,
            replacement_client,
            incidents: HashSet::new(),
        }
    }

    /// Run one monitoring pass over every rack.
    ///
    /// Takes each rack's current health snapshot, classifies every server,
    /// records an incident for every non-healthy classification, and runs
    /// the remediation protocol for REPLACE classifications. A remediation
    /// failure aborts the pass immediately: remaining servers and racks are
    /// not visited, but incidents recorded before the failure stay in the
    /// accumulated set. Re-running the pass after a failure is safe;
    /// recording is set-idempotent.
    pub async fn monitor_racks(&mut self) -> Result<(), MonitorError> {
        tracing::debug!(racks = self.racks.len(), "Starting monitoring pass");

        for rack in &self.racks {
            let snapshot = rack.health();
            tracing::debug!(rack_id = rack.id(), servers = snapshot.len(), "Rack snapshot taken");

            for (server, score) in snapshot {
                let action = self.thresholds.classify(score);
                if action == RequestAction::None {
                    continue;
                }

                // Precondition violation: the rack reported a score for a
                // server it claims not to contain. Skip it rather than
                // remediate a unit we cannot locate.
                let Some(unit) = rack.unit_for_server(&server) else {
                    tracing::warn!(
                        server = %server,
                        rack_id = rack.id(),
                        "Server missing from rack unit map, skipping",
                    );
                    continue;
                };

                let incident =
                    HealthIncident::new(server.clone(), rack.id(), unit, action);
                if self.incidents.insert(incident) {
                    tracing::info!(
                        server = %server,
                        rack_id = rack.id(),
                        unit,
                        action = action.as_str(),
                        score,
                        "Health incident recorded",
                    );
                }

                if action == RequestAction::Replace {
                    remediation::replace_server(
                        self.warranty_client.as_ref(),
                        self.replacement_client.as_ref(),
                        &server,
                        rack.id(),
                        unit,
                    )
                    .await?;
                }
            }
        }

        tracing::debug!(incidents = self.incidents.len(), "Monitoring pass complete");
        Ok(())
    }

    /// Read-only view of every incident recorded since construction.
    pub fn incidents(&self) -> &HashSet<HealthIncident> {
        &self.incidents
    }
}
