//! Repository traits - persistence ports for the domain layer
//!
//! Implementations live in pool-db. All methods are async and return
//! `RepoResult`, mapping infrastructure failures into `DomainError`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{Identity, Membership, Message, Pool, PoolWithMembers};
use crate::error::DomainError;
use crate::value_objects::Uid;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Outcome of an atomic join attempt
///
/// The capacity check and the seat insert happen inside one transaction, so
/// concurrent joiners racing for the last seat cannot both succeed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    /// A seat was claimed
    Joined,
    /// The caller already held a seat; nothing changed
    AlreadyMember,
    /// Every seat was taken
    Full,
    /// The departure time had already passed
    RidePassed,
}

/// Pool persistence operations
#[async_trait]
pub trait PoolRepository: Send + Sync {
    /// Insert a pool and its host's membership in one transaction
    async fn insert_with_host(&self, pool: &Pool) -> RepoResult<()>;

    /// Find a pool by ID
    async fn find_by_id(&self, id: Uid) -> RepoResult<Option<Pool>>;

    /// List pools departing at or after the given instant, with members,
    /// ordered by departure time ascending
    async fn list_departing_after(
        &self,
        cutoff: DateTime<Utc>,
    ) -> RepoResult<Vec<PoolWithMembers>>;

    /// Most recent creation time for a host email, if any
    async fn last_created_by(&self, host_email: &str) -> RepoResult<Option<DateTime<Utc>>>;

    /// Delete a pool and all dependent rows (members, messages) in one
    /// transaction. Returns false if no such pool existed.
    async fn delete_with_members(&self, id: Uid) -> RepoResult<bool>;

    /// Remove pools whose departure time has passed, with their dependent
    /// rows. Returns the number of pools removed.
    async fn delete_expired(&self, now: DateTime<Utc>) -> RepoResult<u64>;
}

/// Membership persistence operations
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Atomically claim a seat: checks the pool exists, the ride has not
    /// departed, and capacity remains, then inserts. Idempotent on
    /// (pool_id, email).
    async fn join(
        &self,
        pool_id: Uid,
        who: &Identity,
        now: DateTime<Utc>,
    ) -> RepoResult<JoinOutcome>;

    /// Release a seat. Succeeds silently when no seat was held.
    async fn leave(&self, pool_id: Uid, email: &str) -> RepoResult<()>;

    /// Check seat ownership
    async fn is_member(&self, pool_id: Uid, email: &str) -> RepoResult<bool>;

    /// All members of a pool, in join order
    async fn members_of(&self, pool_id: Uid) -> RepoResult<Vec<Membership>>;

    /// Current seat count
    async fn count(&self, pool_id: Uid) -> RepoResult<i64>;
}

/// Message persistence operations
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message to a pool's chat
    async fn insert(&self, message: &Message) -> RepoResult<()>;

    /// Most recent `limit` messages for a pool, oldest first
    async fn list(&self, pool_id: Uid, limit: i64) -> RepoResult<Vec<Message>>;
}
