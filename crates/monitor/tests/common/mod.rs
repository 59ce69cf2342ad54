//! In-memory collaborator implementations for monitor tests.
//!
//! These satisfy the same contracts as the production rack and service
//! clients; no mocking framework is involved. The fakes record every call
//! so tests can assert on exactly which collaborator interactions a pass
//! performed.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use rackmon_core::clients::{
    Rack, ReplacementClient, ReplacementError, WarrantyClient, WarrantyError,
};
use rackmon_core::server::Server;
use rackmon_core::types::{HealthScore, UnitNumber};
use rackmon_core::warranty::Warranty;

/// A rack with fixed health and unit data.
pub struct StaticRack {
    id: String,
    health: Vec<(Server, HealthScore)>,
    units: HashMap<Server, UnitNumber>,
}

impl StaticRack {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            health: Vec::new(),
            units: HashMap::new(),
        }
    }

    /// Add a server with both a health score and a unit mapping.
    pub fn with_server(mut self, server: &Server, unit: UnitNumber, health: HealthScore) -> Self {
        self.health.push((server.clone(), health));
        self.units.insert(server.clone(), unit);
        self
    }

    /// Add a server that reports health but is missing from the unit map
    /// (simulates the "server not on this rack" precondition violation).
    pub fn with_unmapped_server(mut self, server: &Server, health: HealthScore) -> Self {
        self.health.push((server.clone(), health));
        self
    }
}

impl Rack for StaticRack {
    fn id(&self) -> &str {
        &self.id
    }

    fn health(&self) -> HashMap<Server, HealthScore> {
        self.health.iter().cloned().collect()
    }

    fn unit_for_server(&self, server: &Server) -> Option<UnitNumber> {
        self.units.get(server).copied()
    }
}

/// What a [`FakeWarrantyClient`] should do when asked for a warranty.
pub enum WarrantyBehavior {
    Return(Warranty),
    NotFound,
    ServiceError,
}

/// Warranty client double that records every lookup.
pub struct FakeWarrantyClient {
    behavior: WarrantyBehavior,
    pub calls: Mutex<Vec<Server>>,
}

impl FakeWarrantyClient {
    pub fn new(behavior: WarrantyBehavior) -> Self {
        Self {
            behavior,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Server> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WarrantyClient for FakeWarrantyClient {
    async fn warranty_for_server(&self, server: &Server) -> Result<Warranty, WarrantyError> {
        self.calls.lock().unwrap().push(server.clone());
        match &self.behavior {
            WarrantyBehavior::Return(warranty) => Ok(warranty.clone()),
            WarrantyBehavior::NotFound => Err(WarrantyError::NotFound {
                server: server.clone(),
            }),
            WarrantyBehavior::ServiceError => {
                Err(WarrantyError::Service("connection refused".to_string()))
            }
        }
    }
}

/// Replacement client double that records every request.
pub struct FakeReplacementClient {
    fail: bool,
    pub calls: Mutex<Vec<(String, UnitNumber, Warranty)>>,
}

impl FakeReplacementClient {
    pub fn new() -> Self {
        Self {
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, UnitNumber, Warranty)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReplacementClient for FakeReplacementClient {
    async fn request_replacement(
        &self,
        rack_id: &str,
        unit: UnitNumber,
        warranty: &Warranty,
    ) -> Result<(), ReplacementError> {
        self.calls
            .lock()
            .unwrap()
            .push((rack_id.to_string(), unit, warranty.clone()));
        if self.fail {
            return Err(ReplacementError::Rejected {
                status: 503,
                body: "maintenance window".to_string(),
            });
        }
        Ok(())
    }
}
