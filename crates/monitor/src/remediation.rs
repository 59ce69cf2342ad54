//! The two-step remediation protocol for REPLACE-classified servers.
//!
//! Warranty lookup first, then the replacement request carrying whatever
//! the lookup returned. Only REPLACE classifications reach this module;
//! INSPECT incidents are recording-only.

use rackmon_core::clients::{ReplacementClient, WarrantyClient};
use rackmon_core::server::Server;
use rackmon_core::types::UnitNumber;

use crate::monitor::{CollaboratorError, MonitorError};

/// Run the remediation protocol for one server.
///
/// Step 1 looks up the server's warranty; a `NotFound` lookup failure stops
/// the protocol before any replacement is requested. Step 2 submits the
/// replacement request with the exact warranty value from step 1, the
/// absent sentinel included -- having no record on file does not by itself
/// block a replacement.
///
/// Any collaborator failure wraps into [`MonitorError::Remediation`] naming
/// the server and preserving the cause.
pub async fn replace_server(
    warranty_client: &dyn WarrantyClient,
    replacement_client: &dyn ReplacementClient,
    server: &Server,
    rack_id: &str,
    unit: UnitNumber,
) -> Result<(), MonitorError> {
    let warranty = warranty_client
        .warranty_for_server(server)
        .await
        .map_err(|e| MonitorError::Remediation {
            server: server.clone(),
            source: CollaboratorError::Warranty(e),
        })?;

    tracing::debug!(
        server = %server,
        rack_id,
        unit,
        warranty_absent = warranty.is_absent(),
        "Warranty resolved, requesting replacement",
    );

    replacement_client
        .request_replacement(rack_id, unit, &warranty)
        .await
        .map_err(|e| MonitorError::Remediation {
            server: server.clone(),
            source: CollaboratorError::Replacement(e),
        })?;

    tracing::info!(server = %server, rack_id, unit, "Replacement requested");

    Ok(())
}
