//! Remediation actions produced by health classification.

use serde::{Deserialize, Serialize};

/// The remediation decision for one server at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    /// Health at or below the replace threshold: request hardware replacement.
    Replace,
    /// Health between the two thresholds: flag for manual inspection.
    Inspect,
    /// Health at or above the inspect threshold: no incident is recorded.
    None,
}

impl RequestAction {
    /// String representation for logs and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestAction::Replace => "replace",
            RequestAction::Inspect => "inspect",
            RequestAction::None => "none",
        }
    }

    /// Parse from a string, defaulting to `None` for unknown values.
    pub fn from_str(s: &str) -> Self {
        match s {
            "replace" => RequestAction::Replace,
            "inspect" => RequestAction::Inspect,
            _ => RequestAction::None,
        }
    }
}
