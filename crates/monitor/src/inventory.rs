//! File-backed rack inventory.
//!
//! [`InventoryRack`] implements the [`Rack`] contract over a JSON inventory
//! file, which is how the one-shot binary gets its rack set. The format is
//! a top-level array of racks, each with an id and a list of server
//! entries:
//!
//! ```json
//! [
//!   {
//!     "id": "RACK-01",
//!     "servers": [
//!       {"server": "SRV-0001", "unit": 1, "health": 0.97},
//!       {"server": "SRV-0002", "unit": 2, "health": 0.55}
//!     ]
//!   }
//! ]
//! ```

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use rackmon_core::clients::Rack;
use rackmon_core::server::Server;
use rackmon_core::types::{HealthScore, UnitNumber};

/// One server entry in an inventory file.
#[derive(Debug, Clone, Deserialize)]
pub struct InventoryServer {
    pub server: Server,
    pub unit: UnitNumber,
    pub health: HealthScore,
}

/// A rack loaded from an inventory file.
///
/// Health snapshots are served from the loaded entries; the inventory is a
/// point-in-time export, so every pass over the same `InventoryRack` sees
/// the same scores.
#[derive(Debug, Deserialize)]
pub struct InventoryRack {
    id: String,
    servers: Vec<InventoryServer>,
}

/// Errors from loading an inventory file.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("Failed to read inventory file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid inventory file: {0}")]
    Parse(#[from] serde_json::Error),
}

impl InventoryRack {
    pub fn new(id: impl Into<String>, servers: Vec<InventoryServer>) -> Self {
        Self {
            id: id.into(),
            servers,
        }
    }
}

impl Rack for InventoryRack {
    fn id(&self) -> &str {
        &self.id
    }

    fn health(&self) -> HashMap<Server, HealthScore> {
        self.servers
            .iter()
            .map(|s| (s.server.clone(), s.health))
            .collect()
    }

    fn unit_for_server(&self, server: &Server) -> Option<UnitNumber> {
        self.servers
            .iter()
            .find(|s| &s.server == server)
            .map(|s| s.unit)
    }
}

/// Load every rack from a JSON inventory file.
pub fn load_racks(path: &Path) -> Result<Vec<Arc<dyn Rack>>, InventoryError> {
    let contents = std::fs::read_to_string(path)?;
    let racks: Vec<InventoryRack> = serde_json::from_str(&contents)?;

    tracing::info!(
        path = %path.display(),
        racks = racks.len(),
        "Loaded rack inventory",
    );

    Ok(racks
        .into_iter()
        .map(|r| Arc::new(r) as Arc<dyn Rack>)
        .collect())
}
