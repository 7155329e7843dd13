//! Membership database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the members table
#[derive(Debug, Clone, FromRow)]
pub struct MembershipModel {
    pub pool_id: i64,
    pub name: String,
    pub email: String,
    pub joined_at: DateTime<Utc>,
}
