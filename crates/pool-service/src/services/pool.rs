//! Pool service
//!
//! Handles pool creation, lookup, membership, and host-gated deletion.

use chrono::{Duration, Utc};
use tracing::{info, instrument};

use pool_core::{
    DomainError, Identity, JoinOutcome, Place, Pool, PoolWithMembers, COOLDOWN_MINUTES,
};

use crate::dto::{CreatePoolRequest, JoinResponse, MemberResponse, PoolResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Pool service
pub struct PoolService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PoolService<'a> {
    /// Create a new PoolService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new pool with the host seated
    ///
    /// Checks run in a fixed order and the first failure wins: destination,
    /// departure time, airport pickup, seat range, then the per-host
    /// cooldown.
    #[instrument(skip(self, host, request), fields(host = %host.email))]
    pub async fn create_pool(
        &self,
        host: &Identity,
        request: CreatePoolRequest,
    ) -> ServiceResult<PoolResponse> {
        let now = Utc::now();

        let destination = Place {
            id: request.destination.id,
            name: request.destination.name.trim().to_string(),
            latitude: request.destination.latitude,
            longitude: request.destination.longitude,
            address: request.destination.address,
        };

        if destination.name.is_empty() {
            return Err(DomainError::DestinationRequired.into());
        }

        if request.departs_at < now {
            return Err(DomainError::DepartureInPast.into());
        }

        let pickup = request
            .pickup
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from);

        if destination.looks_like_airport() && pickup.is_none() {
            return Err(DomainError::PickupRequiredForAirport.into());
        }

        if !Pool::seats_in_range(request.seats) {
            return Err(DomainError::SeatsOutOfRange.into());
        }

        let cooldown_floor = now - Duration::minutes(COOLDOWN_MINUTES);
        if let Some(last) = self.ctx.pool_repo().last_created_by(&host.email).await? {
            if last >= cooldown_floor {
                return Err(DomainError::CooldownActive.into());
            }
        }

        let pool = Pool {
            id: self.ctx.generate_id(),
            destination,
            departure_time: request.departs_at,
            seat_capacity: request.seats,
            mode: request.mode,
            pickup_point: pickup,
            notes: request
                .notes
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(String::from),
            host_name: host.name.clone(),
            host_email: host.email.clone(),
            created_at: now,
        };

        self.ctx.pool_repo().insert_with_host(&pool).await?;

        info!(pool_id = %pool.id, destination = %pool.destination.name, "Pool created");

        let members = self.ctx.member_repo().members_of(pool.id).await?;
        Ok(PoolResponse::from(&PoolWithMembers { pool, members }))
    }

    /// Get a pool by ID with its members
    ///
    /// Expired pools read as gone, matching the lazy reap in discovery.
    #[instrument(skip(self))]
    pub async fn get_pool(&self, pool_id: pool_core::Uid) -> ServiceResult<PoolResponse> {
        let pool = self
            .ctx
            .pool_repo()
            .find_by_id(pool_id)
            .await?
            .filter(|p| !p.is_expired(Utc::now()))
            .ok_or_else(|| ServiceError::not_found("Pool", pool_id.to_string()))?;

        let members = self.ctx.member_repo().members_of(pool_id).await?;
        Ok(PoolResponse::from(&PoolWithMembers { pool, members }))
    }

    /// Join a pool
    ///
    /// Idempotent for existing members; a full pool or a departed ride is a
    /// conflict.
    #[instrument(skip(self, who), fields(who = %who.email))]
    pub async fn join_pool(
        &self,
        pool_id: pool_core::Uid,
        who: &Identity,
    ) -> ServiceResult<JoinResponse> {
        let outcome = self
            .ctx
            .member_repo()
            .join(pool_id, who, Utc::now())
            .await?;

        match outcome {
            JoinOutcome::Joined => {
                info!(pool_id = %pool_id, "Seat claimed");
                Ok(JoinResponse {
                    joined: true,
                    already_member: false,
                })
            }
            JoinOutcome::AlreadyMember => Ok(JoinResponse {
                joined: false,
                already_member: true,
            }),
            JoinOutcome::Full => Err(DomainError::PoolFull.into()),
            JoinOutcome::RidePassed => Err(DomainError::RidePassed.into()),
        }
    }

    /// Leave a pool
    ///
    /// Leaving without holding a seat is a silent no-op. The host may leave
    /// too; the pool stays up until deleted or expired.
    #[instrument(skip(self, who), fields(who = %who.email))]
    pub async fn leave_pool(
        &self,
        pool_id: pool_core::Uid,
        who: &Identity,
    ) -> ServiceResult<()> {
        self.ctx
            .pool_repo()
            .find_by_id(pool_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Pool", pool_id.to_string()))?;

        self.ctx.member_repo().leave(pool_id, &who.email).await?;
        Ok(())
    }

    /// List members of a pool
    ///
    /// Visible to seat holders and to the host.
    #[instrument(skip(self, viewer), fields(viewer = %viewer.email))]
    pub async fn members_of(
        &self,
        pool_id: pool_core::Uid,
        viewer: &Identity,
    ) -> ServiceResult<Vec<MemberResponse>> {
        let pool = self
            .ctx
            .pool_repo()
            .find_by_id(pool_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Pool", pool_id.to_string()))?;

        self.require_membership(&pool, viewer).await?;

        let members = self.ctx.member_repo().members_of(pool_id).await?;
        Ok(members.iter().map(MemberResponse::from).collect())
    }

    /// Delete a pool (host only)
    ///
    /// Returns false when the requester is not the host; the pool is left
    /// untouched.
    #[instrument(skip(self, requester), fields(requester = %requester.email))]
    pub async fn delete_pool(
        &self,
        pool_id: pool_core::Uid,
        requester: &Identity,
    ) -> ServiceResult<bool> {
        let pool = self
            .ctx
            .pool_repo()
            .find_by_id(pool_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Pool", pool_id.to_string()))?;

        if !pool.is_host(&requester.email) {
            return Ok(false);
        }

        let deleted = self.ctx.pool_repo().delete_with_members(pool_id).await?;
        if deleted {
            info!(pool_id = %pool_id, "Pool deleted by host");
        }
        Ok(deleted)
    }

    /// Require the viewer to hold a seat or be the host
    pub(crate) async fn require_membership(
        &self,
        pool: &Pool,
        viewer: &Identity,
    ) -> ServiceResult<()> {
        if pool.is_host(&viewer.email) {
            return Ok(());
        }
        if self
            .ctx
            .member_repo()
            .is_member(pool.id, &viewer.email)
            .await?
        {
            return Ok(());
        }
        Err(DomainError::NotPoolMember.into())
    }
}
