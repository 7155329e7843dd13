//! Pool entity - a proposed shared ride

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Membership, Place};
use crate::value_objects::Uid;

/// Minimum seats a pool may offer
pub const SEATS_MIN: i32 = 1;
/// Maximum seats a pool may offer
pub const SEATS_MAX: i32 = 10;
/// Per-host creation cooldown window, in minutes
pub const COOLDOWN_MINUTES: i64 = 15;

/// Transport mode for a pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportMode {
    Cab,
    Auto,
}

impl TransportMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cab => "Cab",
            Self::Auto => "Auto",
        }
    }

    /// Parse from the stored string form; unknown values default to Cab
    pub fn parse_lossy(s: &str) -> Self {
        if s.eq_ignore_ascii_case("auto") {
            Self::Auto
        } else {
            Self::Cab
        }
    }
}

/// Pool (shared ride) entity
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub id: Uid,
    pub destination: Place,
    pub departure_time: DateTime<Utc>,
    pub seat_capacity: i32,
    pub mode: TransportMode,
    pub pickup_point: Option<String>,
    pub notes: Option<String>,
    pub host_name: String,
    pub host_email: String,
    pub created_at: DateTime<Utc>,
}

impl Pool {
    /// Check if an email belongs to the pool's host
    #[inline]
    pub fn is_host(&self, email: &str) -> bool {
        self.host_email.eq_ignore_ascii_case(email.trim())
    }

    /// A pool is expired once its departure time has passed
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.departure_time < now
    }

    /// Seats within the allowed [SEATS_MIN, SEATS_MAX] range
    #[inline]
    pub fn seats_in_range(seats: i32) -> bool {
        (SEATS_MIN..=SEATS_MAX).contains(&seats)
    }
}

/// A pool annotated with its current membership list
#[derive(Debug, Clone)]
pub struct PoolWithMembers {
    pub pool: Pool,
    pub members: Vec<Membership>,
}

impl PoolWithMembers {
    /// Check whether an email currently holds a seat
    pub fn has_member(&self, email: &str) -> bool {
        self.members
            .iter()
            .any(|m| m.email.eq_ignore_ascii_case(email.trim()))
    }
}
