//! Membership - a claimed seat in a pool

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Uid;

/// A seat held by one identity in one pool
///
/// Uniqueness is keyed on (pool_id, email); joining twice is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub pool_id: Uid,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

impl Membership {
    /// Case-insensitive check against a member email
    pub fn belongs_to(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_belongs_to_ignores_case() {
        let member = Membership {
            pool_id: Uid::new(1),
            name: "Ravi".to_string(),
            email: "ravi@campus.example.edu".to_string(),
            joined_at: Utc::now(),
        };
        assert!(member.belongs_to("RAVI@campus.example.edu "));
        assert!(!member.belongs_to("asha@campus.example.edu"));
    }
}
