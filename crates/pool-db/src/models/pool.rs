//! Pool database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the pools table
#[derive(Debug, Clone, FromRow)]
pub struct PoolModel {
    pub id: i64,
    pub destination_id: Option<String>,
    pub destination_name: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub destination_address: Option<String>,
    pub departs_at: DateTime<Utc>,
    pub seats: i32,
    pub mode: String,
    pub notes: Option<String>,
    pub host_name: String,
    pub host_email: String,
    pub created_at: DateTime<Utc>,
    pub pickup: Option<String>,
}
