//! Identity - an authenticated (name, email) pair

use serde::{Deserialize, Serialize};

/// An authenticated campus identity
///
/// Produced by the identity gate after domain verification; the engine
/// treats it as opaque and already trusted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Create a new Identity with a lowercased email
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into().trim().to_lowercase(),
        }
    }

    /// Case-insensitive email comparison
    pub fn email_matches(&self, other: &str) -> bool {
        self.email.eq_ignore_ascii_case(other.trim())
    }
}
