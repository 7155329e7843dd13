//! Message database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the messages table
#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub pool_id: i64,
    pub sender_email: String,
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
