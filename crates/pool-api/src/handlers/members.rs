//! Member handlers
//!
//! Endpoints for joining, leaving, and listing pool members.

use axum::{
    extract::{Path, State},
    Json,
};
use pool_service::{JoinResponse, MemberResponse, PoolService};

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult, NoContent};
use crate::state::AppState;

/// Claim a seat in a pool
///
/// PUT /pools/{pool_id}/members/@me
pub async fn join_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<Json<JoinResponse>> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = PoolService::new(state.service_context());
    let response = service.join_pool(pool_id, &auth.identity).await?;
    Ok(Json(response))
}

/// Give up a seat in a pool
///
/// DELETE /pools/{pool_id}/members/@me
pub async fn leave_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<NoContent> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = PoolService::new(state.service_context());
    service.leave_pool(pool_id, &auth.identity).await?;
    Ok(NoContent)
}

/// List pool members (seat holders and host only)
///
/// GET /pools/{pool_id}/members
pub async fn get_members(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = PoolService::new(state.service_context());
    let response = service.members_of(pool_id, &auth.identity).await?;
    Ok(Json(response))
}
