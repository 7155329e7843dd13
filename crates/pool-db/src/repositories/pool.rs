//! SQLite implementation of PoolRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use pool_core::{Membership, Pool, PoolRepository, PoolWithMembers, RepoResult, Uid};

use crate::mappers::PoolInsert;
use crate::models::{MembershipModel, PoolModel};

use super::error::map_db_error;

const POOL_COLUMNS: &str = "id, destination_id, destination_name, lat, lng, destination_address, \
     departs_at, seats, mode, notes, host_name, host_email, created_at, pickup";

/// SQLite implementation of PoolRepository
#[derive(Clone)]
pub struct SqlitePoolRepository {
    pool: SqlitePool,
}

impl SqlitePoolRepository {
    /// Create a new SqlitePoolRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoolRepository for SqlitePoolRepository {
    #[instrument(skip(self, pool), fields(pool_id = %pool.id))]
    async fn insert_with_host(&self, pool: &Pool) -> RepoResult<()> {
        let insert = PoolInsert::new(pool);
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO pools (id, destination_id, destination_name, lat, lng,
                destination_address, departs_at, seats, mode, notes,
                host_name, host_email, created_at, pickup)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
            "#,
        )
        .bind(insert.id)
        .bind(insert.destination_id)
        .bind(insert.destination_name)
        .bind(insert.lat)
        .bind(insert.lng)
        .bind(insert.destination_address)
        .bind(pool.departure_time)
        .bind(insert.seats)
        .bind(insert.mode)
        .bind(insert.notes)
        .bind(insert.host_name)
        .bind(insert.host_email)
        .bind(pool.created_at)
        .bind(insert.pickup)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // The host occupies the first seat
        sqlx::query(
            r#"
            INSERT OR IGNORE INTO members (pool_id, name, email, joined_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(insert.id)
        .bind(insert.host_name)
        .bind(insert.host_email)
        .bind(pool.created_at)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uid) -> RepoResult<Option<Pool>> {
        let result = sqlx::query_as::<_, PoolModel>(&format!(
            "SELECT {POOL_COLUMNS} FROM pools WHERE id = ?1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Pool::from))
    }

    #[instrument(skip(self))]
    async fn list_departing_after(
        &self,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<PoolWithMembers>> {
        let models = sqlx::query_as::<_, PoolModel>(&format!(
            "SELECT {POOL_COLUMNS} FROM pools WHERE departs_at >= ?1 ORDER BY departs_at ASC"
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut out = Vec::with_capacity(models.len());
        for model in models {
            let members = sqlx::query_as::<_, MembershipModel>(
                r#"
                SELECT pool_id, name, email, joined_at
                FROM members
                WHERE pool_id = ?1
                ORDER BY joined_at ASC, email ASC
                "#,
            )
            .bind(model.id)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

            out.push(PoolWithMembers {
                pool: Pool::from(model),
                members: members.into_iter().map(Membership::from).collect(),
            });
        }

        Ok(out)
    }

    #[instrument(skip(self))]
    async fn last_created_by(&self, host_email: &str) -> RepoResult<Option<DateTime<Utc>>> {
        let result = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            r#"
            SELECT MAX(created_at) FROM pools WHERE host_email = ?1
            "#,
        )
        .bind(host_email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn delete_with_members(&self, id: Uid) -> RepoResult<bool> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Children first, then the pool row
        sqlx::query("DELETE FROM messages WHERE pool_id = ?1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM members WHERE pool_id = ?1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM pools WHERE id = ?1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn delete_expired(&self, now: DateTime<Utc>) -> RepoResult<u64> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            "DELETE FROM messages WHERE pool_id IN (SELECT id FROM pools WHERE departs_at < ?1)",
        )
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            "DELETE FROM members WHERE pool_id IN (SELECT id FROM pools WHERE departs_at < ?1)",
        )
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM pools WHERE departs_at < ?1")
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(result.rows_affected())
    }
}
