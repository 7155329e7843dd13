//! Pool handlers
//!
//! Endpoints for creating, discovering, and deleting pools.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use pool_service::{
    CreatePoolRequest, DiscoveryFilter, DiscoveryService, PoolResponse, PoolService, ServiceError,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new pool
///
/// POST /pools
pub async fn create_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePoolRequest>,
) -> ApiResult<Created<Json<PoolResponse>>> {
    let service = PoolService::new(state.service_context());
    let response = service.create_pool(&auth.identity, request).await?;
    Ok(Created(Json(response)))
}

/// List upcoming pools with filters and ranking
///
/// GET /pools
pub async fn list_pools(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(filter): Query<DiscoveryFilter>,
) -> ApiResult<Json<Vec<PoolResponse>>> {
    let service = DiscoveryService::new(state.service_context());
    let response = service.list_pools(&filter).await?;
    Ok(Json(response))
}

/// Get pool by ID
///
/// GET /pools/{pool_id}
pub async fn get_pool(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<Json<PoolResponse>> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = PoolService::new(state.service_context());
    let response = service.get_pool(pool_id).await?;
    Ok(Json(response))
}

/// Delete pool (host only)
///
/// DELETE /pools/{pool_id}
pub async fn delete_pool(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<NoContent> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = PoolService::new(state.service_context());
    let deleted = service.delete_pool(pool_id, &auth.identity).await?;
    if !deleted {
        return Err(ApiError::Service(ServiceError::permission_denied(
            "delete pool",
        )));
    }
    Ok(NoContent)
}
