//! `rackmon-monitor` -- one-shot rack health monitoring pass.
//!
//! Loads a rack inventory, runs a single monitoring pass against the
//! warranty and Wingnut services, logs the incident summary, and exits.
//! Periodic monitoring is a scheduling concern left to cron or a
//! supervisor; the process itself performs exactly one pass.
//!
//! # Environment variables
//!
//! | Variable              | Required | Default | Description                              |
//! |-----------------------|----------|---------|------------------------------------------|
//! | `WARRANTY_API_URL`    | yes      | --      | Warranty service base URL                |
//! | `WINGNUT_API_URL`     | yes      | --      | Wingnut replacement service base URL     |
//! | `RACK_INVENTORY_PATH` | yes      | --      | Path to the JSON rack inventory file     |
//! | `REPLACE_THRESHOLD`   | no       | `0.8`   | Scores at/below this request replacement |
//! | `INSPECT_THRESHOLD`   | no       | `0.9`   | Scores at/above this are healthy         |

use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rackmon_core::thresholds::HealthThresholds;
use rackmon_monitor::inventory;
use rackmon_monitor::monitor::RackMonitor;
use rackmon_warranty::WarrantyApi;
use rackmon_wingnut::WingnutApi;

/// Default score cutoff for requesting a replacement.
const DEFAULT_REPLACE_THRESHOLD: f64 = 0.8;

/// Default score cutoff above which a server is healthy.
const DEFAULT_INSPECT_THRESHOLD: f64 = 0.9;

fn required_var(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        tracing::error!("{name} environment variable is required");
        std::process::exit(1);
    })
}

fn threshold_var(name: &str, default: f64) -> f64 {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::error!("{name} must be a valid number, got \"{raw}\"");
            std::process::exit(1);
        }),
        Err(_) => default,
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    "rackmon_monitor=info,rackmon_warranty=info,rackmon_wingnut=info".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let warranty_url = required_var("WARRANTY_API_URL");
    let wingnut_url = required_var("WINGNUT_API_URL");
    let inventory_path = PathBuf::from(required_var("RACK_INVENTORY_PATH"));

    let replace = threshold_var("REPLACE_THRESHOLD", DEFAULT_REPLACE_THRESHOLD);
    let inspect = threshold_var("INSPECT_THRESHOLD", DEFAULT_INSPECT_THRESHOLD);

    let thresholds = HealthThresholds::new(replace, inspect).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invalid threshold configuration");
        std::process::exit(1);
    });

    let racks = inventory::load_racks(&inventory_path).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = %inventory_path.display(), "Failed to load rack inventory");
        std::process::exit(1);
    });

    tracing::info!(
        racks = racks.len(),
        replace_threshold = thresholds.replace,
        inspect_threshold = thresholds.inspect,
        "Starting rackmon-monitor pass",
    );

    let mut monitor = RackMonitor::new(
        racks,
        Arc::new(WarrantyApi::new(warranty_url)),
        Arc::new(WingnutApi::new(wingnut_url)),
        thresholds,
    );

    match monitor.monitor_racks().await {
        Ok(()) => {
            tracing::info!(
                incidents = monitor.incidents().len(),
                "Monitoring pass complete",
            );
        }
        Err(e) => {
            // Incidents recorded before the failure are still worth surfacing.
            tracing::error!(
                error = %e,
                incidents = monitor.incidents().len(),
                "Monitoring pass aborted",
            );
            std::process::exit(1);
        }
    }
}
