//! Server identity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque server identifier (e.g. an asset tag like `"SRV-0042"`).
///
/// Equality and hashing are by identifier only; the core never constructs
/// servers itself, it receives them from the rack/inventory layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Server(String);

impl Server {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Server {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
