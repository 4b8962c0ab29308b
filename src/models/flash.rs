//! Flash message metadata

use serde::{Deserialize, Serialize};

/// Ephemeral UI notification carried in `x-flash-type` / `x-flash-message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    /// Notification kind (e.g. "success", "error")
    #[serde(rename = "type")]
    pub kind: String,
    /// Notification text
    pub msg: String,
}

impl Flash {
    /// Create a flash message
    #[must_use]
    pub fn new(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for Flash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind, self.msg)
    }
}
