//! SQLite implementation of MemberRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::instrument;

use pool_core::{Identity, JoinOutcome, MemberRepository, Membership, RepoResult, Uid};

use crate::models::MembershipModel;

use super::error::{map_db_error, pool_not_found};

/// SQLite implementation of MemberRepository
#[derive(Clone)]
pub struct SqliteMemberRepository {
    pool: SqlitePool,
}

impl SqliteMemberRepository {
    /// Create a new SqliteMemberRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for SqliteMemberRepository {
    #[instrument(skip(self, who), fields(email = %who.email))]
    async fn join(
        &self,
        pool_id: Uid,
        who: &Identity,
        now: DateTime<Utc>,
    ) -> RepoResult<JoinOutcome> {
        // All checks and the insert run inside one transaction so two
        // racers cannot both claim the last seat.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let already = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE pool_id = ?1 AND email = ?2)",
        )
        .bind(pool_id.into_inner())
        .bind(&who.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if already != 0 {
            return Ok(JoinOutcome::AlreadyMember);
        }

        let row = sqlx::query_as::<_, (i32, DateTime<Utc>)>(
            "SELECT seats, departs_at FROM pools WHERE id = ?1",
        )
        .bind(pool_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some((seats, departs_at)) = row else {
            return Err(pool_not_found(pool_id));
        };

        if departs_at < now {
            return Ok(JoinOutcome::RidePassed);
        }

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM members WHERE pool_id = ?1",
        )
        .bind(pool_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if count >= i64::from(seats) {
            return Ok(JoinOutcome::Full);
        }

        sqlx::query(
            r#"
            INSERT OR IGNORE INTO members (pool_id, name, email, joined_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(pool_id.into_inner())
        .bind(&who.name)
        .bind(&who.email)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(JoinOutcome::Joined)
    }

    #[instrument(skip(self))]
    async fn leave(&self, pool_id: Uid, email: &str) -> RepoResult<()> {
        sqlx::query("DELETE FROM members WHERE pool_id = ?1 AND email = ?2")
            .bind(pool_id.into_inner())
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_member(&self, pool_id: Uid, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, i64>(
            "SELECT EXISTS(SELECT 1 FROM members WHERE pool_id = ?1 AND email = ?2)",
        )
        .bind(pool_id.into_inner())
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result != 0)
    }

    #[instrument(skip(self))]
    async fn members_of(&self, pool_id: Uid) -> RepoResult<Vec<Membership>> {
        let models = sqlx::query_as::<_, MembershipModel>(
            r#"
            SELECT pool_id, name, email, joined_at
            FROM members
            WHERE pool_id = ?1
            ORDER BY joined_at ASC, email ASC
            "#,
        )
        .bind(pool_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Membership::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, pool_id: Uid) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM members WHERE pool_id = ?1")
                .bind(pool_id.into_inner())
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }
}
