//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Uids are
//! serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pool_core::TransportMode;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Pool Responses
// ============================================================================

/// A pool as returned by create/get/list endpoints
#[derive(Debug, Clone, Serialize)]
pub struct PoolResponse {
    pub id: String,
    pub destination: PlaceResponse,
    pub departs_at: DateTime<Utc>,
    pub seats: i32,
    pub seats_taken: i64,
    pub mode: TransportMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub host_name: String,
    pub host_email: String,
    pub created_at: DateTime<Utc>,
    pub members: Vec<MemberResponse>,
    /// Distance from the rider's position, when ranking applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Set when this pool was pinned by a shared deep link
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub pinned: bool,
}

/// A seat holder
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}

/// Join outcome response
#[derive(Debug, Clone, Serialize)]
pub struct JoinResponse {
    pub joined: bool,
    pub already_member: bool,
}

// ============================================================================
// Place Responses
// ============================================================================

/// A place candidate
#[derive(Debug, Clone, Serialize)]
pub struct PlaceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}

// ============================================================================
// Chat Responses
// ============================================================================

/// A chat message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_name: String,
    pub sender_email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
