//! Message handlers
//!
//! Endpoints for pool chat.

use axum::{
    extract::{Path, State},
    Json,
};
use pool_service::{ChatService, MessageResponse, PostMessageRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// List recent messages for a pool
///
/// GET /pools/{pool_id}/messages
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = ChatService::new(state.service_context());
    let response = service.list_messages(pool_id, &auth.identity).await?;
    Ok(Json(response))
}

/// Post a message to a pool's chat
///
/// POST /pools/{pool_id}/messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(pool_id): Path<String>,
    ValidatedJson(request): ValidatedJson<PostMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let pool_id = pool_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid pool_id format"))?;

    let service = ChatService::new(state.service_context());
    let response = service
        .post_message(pool_id, &auth.identity, request)
        .await?;
    Ok(Created(Json(response)))
}
