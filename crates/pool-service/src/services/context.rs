//! Service context - dependency container for services
//!
//! Holds the repositories, the identity gate, the place resolver, and the
//! ID generator shared by every service.

use std::sync::Arc;

use pool_common::IdentityGate;
use pool_core::{
    LocationResolver, MemberRepository, MessageRepository, PoolRepository, Uid, UidGenerator,
};
use pool_db::SqlitePool;

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    db: SqlitePool,

    // Repositories
    pool_repo: Arc<dyn PoolRepository>,
    member_repo: Arc<dyn MemberRepository>,
    message_repo: Arc<dyn MessageRepository>,

    // Place lookups
    location_resolver: Arc<dyn LocationResolver>,

    // Identity
    identity_gate: Arc<IdentityGate>,

    // ID generation
    uid_generator: Arc<UidGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        db: SqlitePool,
        pool_repo: Arc<dyn PoolRepository>,
        member_repo: Arc<dyn MemberRepository>,
        message_repo: Arc<dyn MessageRepository>,
        location_resolver: Arc<dyn LocationResolver>,
        identity_gate: Arc<IdentityGate>,
        uid_generator: Arc<UidGenerator>,
    ) -> Self {
        Self {
            db,
            pool_repo,
            member_repo,
            message_repo,
            location_resolver,
            identity_gate,
            uid_generator,
        }
    }

    /// Get the SQLite connection pool
    pub fn db(&self) -> &SqlitePool {
        &self.db
    }

    /// Get the pool repository
    pub fn pool_repo(&self) -> &dyn PoolRepository {
        self.pool_repo.as_ref()
    }

    /// Get the member repository
    pub fn member_repo(&self) -> &dyn MemberRepository {
        self.member_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the place resolver
    pub fn location_resolver(&self) -> &dyn LocationResolver {
        self.location_resolver.as_ref()
    }

    /// Get the identity gate
    pub fn identity_gate(&self) -> &IdentityGate {
        self.identity_gate.as_ref()
    }

    /// Generate a new Uid
    pub fn generate_id(&self) -> Uid {
        self.uid_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("db", &"SqlitePool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    db: Option<SqlitePool>,
    pool_repo: Option<Arc<dyn PoolRepository>>,
    member_repo: Option<Arc<dyn MemberRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    location_resolver: Option<Arc<dyn LocationResolver>>,
    identity_gate: Option<Arc<IdentityGate>>,
    uid_generator: Option<Arc<UidGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            db: None,
            pool_repo: None,
            member_repo: None,
            message_repo: None,
            location_resolver: None,
            identity_gate: None,
            uid_generator: None,
        }
    }

    pub fn db(mut self, db: SqlitePool) -> Self {
        self.db = Some(db);
        self
    }

    pub fn pool_repo(mut self, repo: Arc<dyn PoolRepository>) -> Self {
        self.pool_repo = Some(repo);
        self
    }

    pub fn member_repo(mut self, repo: Arc<dyn MemberRepository>) -> Self {
        self.member_repo = Some(repo);
        self
    }

    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    pub fn location_resolver(mut self, resolver: Arc<dyn LocationResolver>) -> Self {
        self.location_resolver = Some(resolver);
        self
    }

    pub fn identity_gate(mut self, gate: Arc<IdentityGate>) -> Self {
        self.identity_gate = Some(gate);
        self
    }

    pub fn uid_generator(mut self, generator: Arc<UidGenerator>) -> Self {
        self.uid_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.db
                .ok_or_else(|| ServiceError::validation("db is required"))?,
            self.pool_repo
                .ok_or_else(|| ServiceError::validation("pool_repo is required"))?,
            self.member_repo
                .ok_or_else(|| ServiceError::validation("member_repo is required"))?,
            self.message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            self.location_resolver
                .ok_or_else(|| ServiceError::validation("location_resolver is required"))?,
            self.identity_gate
                .ok_or_else(|| ServiceError::validation("identity_gate is required"))?,
            self.uid_generator
                .ok_or_else(|| ServiceError::validation("uid_generator is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
