//! SQLite implementation of MessageRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use pool_core::{Message, MessageRepository, RepoResult, Uid};

use crate::models::MessageModel;

use super::error::map_db_error;

/// SQLite implementation of MessageRepository
#[derive(Clone)]
pub struct SqliteMessageRepository {
    pool: SqlitePool,
}

impl SqliteMessageRepository {
    /// Create a new SqliteMessageRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for SqliteMessageRepository {
    #[instrument(skip(self, message), fields(pool_id = %message.pool_id))]
    async fn insert(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO messages (id, pool_id, sender_email, sender_name, content, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(message.id.into_inner())
        .bind(message.pool_id.into_inner())
        .bind(&message.sender_email)
        .bind(&message.sender_name)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, pool_id: Uid, limit: i64) -> RepoResult<Vec<Message>> {
        let limit = limit.clamp(1, 1000);

        // Take the newest rows, then flip back to chronological order.
        // Message IDs are time-ordered, so ordering by id is stable even
        // for messages created within the same millisecond.
        let models = sqlx::query_as::<_, MessageModel>(
            r#"
            SELECT id, pool_id, sender_email, sender_name, content, created_at
            FROM (
                SELECT id, pool_id, sender_email, sender_name, content, created_at
                FROM messages
                WHERE pool_id = ?1
                ORDER BY id DESC
                LIMIT ?2
            )
            ORDER BY id ASC
            "#,
        )
        .bind(pool_id.into_inner())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Message::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SqliteMessageRepository>();
    }
}
