//! Message - a chat line scoped to one pool

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Uid;

/// Maximum messages returned per chat fetch
pub const MESSAGE_FETCH_LIMIT: i64 = 200;

/// A chat message posted inside a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uid,
    pub pool_id: Uid,
    pub sender_email: String,
    pub sender_name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
