//! Test fixtures for integration tests
//!
//! Identities, request builders, and response shapes shared by the API
//! tests.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

/// Institutional domain used by the test identity gate
pub const TEST_DOMAIN: &str = "hyderabad.bits-pilani.ac.in";

/// A campus identity presented through self-asserted headers
#[derive(Debug, Clone)]
pub struct TestUser {
    pub name: String,
    pub email: String,
}

impl TestUser {
    /// Build a user with an email on the institutional domain
    pub fn campus(name: &str) -> Self {
        let local = name.to_lowercase().replace(' ', ".");
        Self {
            name: name.to_string(),
            email: format!("{local}@{TEST_DOMAIN}"),
        }
    }

    /// Build a user with an email outside the institutional domain
    pub fn outsider(name: &str) -> Self {
        Self {
            name: name.to_string(),
            email: format!("{}@gmail.com", name.to_lowercase()),
        }
    }
}

/// Create-pool request body
pub fn pool_body(destination: &str, hours_ahead: i64, seats: i32) -> Value {
    json!({
        "destination": { "name": destination },
        "departs_at": (Utc::now() + Duration::hours(hours_ahead)).to_rfc3339(),
        "seats": seats,
        "mode": "Cab",
    })
}

/// Create-pool request body with a pickup point
pub fn pool_body_with_pickup(
    destination: &str,
    pickup: &str,
    hours_ahead: i64,
    seats: i32,
) -> Value {
    let mut body = pool_body(destination, hours_ahead, seats);
    body["pickup"] = json!(pickup);
    body
}

/// Post-message request body
pub fn message_body(content: &str) -> Value {
    json!({ "content": content })
}

// ============================================================================
// Response shapes
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PoolBody {
    pub id: String,
    pub destination: PlaceBody,
    pub departs_at: DateTime<Utc>,
    pub seats: i32,
    pub seats_taken: i64,
    pub host_email: String,
    pub members: Vec<MemberBody>,
    #[serde(default)]
    pub pickup: Option<String>,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Deserialize)]
pub struct PlaceBody {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MemberBody {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct JoinBody {
    pub joined: bool,
    pub already_member: bool,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub id: String,
    pub sender_email: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetailBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorDetailBody {
    pub code: String,
    pub message: String,
}
