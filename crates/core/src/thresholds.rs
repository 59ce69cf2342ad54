//! Health threshold configuration and the classification policy.
//!
//! Pure logic -- no I/O. The caller (the monitor) fetches health snapshots
//! from racks and passes individual scores in.

use serde::{Deserialize, Serialize};

use crate::action::RequestAction;
use crate::error::CoreError;
use crate::types::HealthScore;

/// The two health cutoffs a monitor is configured with.
///
/// Fields are named rather than positional so the two values cannot be
/// swapped silently at a construction site. Invariant: `replace <= inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Scores at or below this value classify as [`RequestAction::Replace`].
    pub replace: HealthScore,
    /// Scores at or above this value are healthy; scores strictly between
    /// `replace` and `inspect` classify as [`RequestAction::Inspect`].
    pub inspect: HealthScore,
}

impl HealthThresholds {
    /// Validate and construct a threshold pair.
    ///
    /// Fails with `CoreError::Validation` if either value is NaN or if
    /// `replace > inspect`.
    pub fn new(replace: HealthScore, inspect: HealthScore) -> Result<Self, CoreError> {
        if replace.is_nan() || inspect.is_nan() {
            return Err(CoreError::Validation(
                "Health thresholds must not be NaN".to_string(),
            ));
        }
        if replace > inspect {
            return Err(CoreError::Validation(format!(
                "replace threshold ({replace}) must not exceed inspect threshold ({inspect})"
            )));
        }
        Ok(Self { replace, inspect })
    }

    /// Classify a single health score against these thresholds.
    ///
    /// Total and side-effect-free. Boundary policy: the replace threshold is
    /// inclusive on the unhealthy side (a score exactly at `replace` is
    /// `Replace`, not `Inspect`); the inspect threshold is inclusive on the
    /// healthy side (a score exactly at `inspect` is healthy).
    pub fn classify(&self, score: HealthScore) -> RequestAction {
        if score <= self.replace {
            RequestAction::Replace
        } else if score < self.inspect {
            RequestAction::Inspect
        } else {
            RequestAction::None
        }
    }
}
