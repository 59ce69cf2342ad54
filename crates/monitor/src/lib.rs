//! `rackmon-monitor` -- the rack monitoring engine.
//!
//! [`RackMonitor`](monitor::RackMonitor) runs monitoring passes over a set
//! of racks, classifies every server's health, accumulates incidents, and
//! drives the remediation protocol for servers that need replacing. The
//! binary entrypoint lives in `main.rs`.

pub mod inventory;
pub mod monitor;
pub mod remediation;
