//! Warranty coverage records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coverage level attached to a warranty record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    /// Full parts-and-labor coverage.
    Full,
    /// Parts only.
    Parts,
    /// No coverage. This is the level carried by the absent sentinel.
    None,
}

/// Coverage for one server, as returned by the warranty lookup service.
///
/// A server with no specific warranty record on file is represented by the
/// [`absent`](Warranty::absent) sentinel: a processable value, distinct from
/// the service's "warranty not found" lookup failure. Replacement requests
/// accept the sentinel; an uncovered replacement is billed, not blocked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warranty {
    /// Warranty record identifier, `None` for the absent sentinel.
    pub id: Option<String>,
    pub coverage: CoverageLevel,
    /// Coverage end date, if the record carries one.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Warranty {
    pub fn new(
        id: impl Into<String>,
        coverage: CoverageLevel,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id.into()),
            coverage,
            expires_at,
        }
    }

    /// The absent-warranty sentinel: no record on file, treat as uncovered
    /// but processable.
    pub fn absent() -> Self {
        Self {
            id: None,
            coverage: CoverageLevel::None,
            expires_at: None,
        }
    }

    /// Whether this value is the absent sentinel.
    pub fn is_absent(&self) -> bool {
        self.id.is_none()
    }
}
