//! `rackmon-core` -- domain types and pure logic for rack health monitoring.
//!
//! Everything in this crate is I/O-free: health classification, incident
//! records, threshold configuration, and the trait contracts the monitor
//! uses to talk to racks and to the two external remediation services.
//! Concrete service clients live in `rackmon-warranty` and
//! `rackmon-wingnut`; the stateful monitor lives in `rackmon-monitor`.

pub mod action;
pub mod clients;
pub mod error;
pub mod incident;
pub mod server;
pub mod thresholds;
pub mod types;
pub mod warranty;
