//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and, where they carry user
//! input, `Validate`. Structural checks live here; business rules (future
//! departure, cooldown, capacity) live in the services.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use pool_core::{TransportMode, Uid};

// ============================================================================
// Pool Requests
// ============================================================================

/// Destination (or pickup candidate) supplied by the client
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DestinationInput {
    /// Resolver-assigned place ID, when the client picked a candidate
    pub id: Option<String>,

    #[validate(length(min = 1, max = 120, message = "Destination name must be 1-120 characters"))]
    pub name: String,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,

    #[validate(length(max = 200, message = "Address must be at most 200 characters"))]
    pub address: Option<String>,
}

/// Create pool request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePoolRequest {
    #[validate(nested)]
    pub destination: DestinationInput,

    /// Departure time (RFC 3339)
    pub departs_at: DateTime<Utc>,

    pub seats: i32,

    pub mode: TransportMode,

    #[validate(length(max = 120, message = "Pickup must be at most 120 characters"))]
    pub pickup: Option<String>,

    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Discovery Requests
// ============================================================================

/// Discovery filters, taken from query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryFilter {
    /// Target departure time as Unix seconds; pools within the window
    /// around it are kept
    pub time: Option<i64>,

    /// Exact destination name (case-insensitive)
    pub destination: Option<String>,

    /// Exact pickup point (case-insensitive)
    pub pickup: Option<String>,

    /// Rider position for distance ranking
    pub lat: Option<f64>,
    pub lng: Option<f64>,

    /// Pool ID from a shared deep link; pinned to the front when present
    pub pool: Option<Uid>,
}

// ============================================================================
// Chat Requests
// ============================================================================

/// Post message request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PostMessageRequest {
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pool_request_deserializes() {
        let json = r#"{
            "destination": {"name": "Gachibowli", "latitude": 17.44, "longitude": 78.35},
            "departs_at": "2026-09-01T18:30:00Z",
            "seats": 3,
            "mode": "Cab",
            "pickup": "BPHC Main Gate"
        }"#;
        let req: CreatePoolRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.destination.name, "Gachibowli");
        assert_eq!(req.seats, 3);
        assert_eq!(req.mode, TransportMode::Cab);
        assert!(req.notes.is_none());
        req.validate().unwrap();
    }

    #[test]
    fn test_empty_destination_name_fails_validation() {
        let json = r#"{
            "destination": {"name": ""},
            "departs_at": "2026-09-01T18:30:00Z",
            "seats": 3,
            "mode": "Auto"
        }"#;
        let req: CreatePoolRequest = serde_json::from_str(json).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_discovery_filter_defaults_empty() {
        let filter = DiscoveryFilter::default();
        assert!(filter.time.is_none());
        assert!(filter.pool.is_none());
    }
}
