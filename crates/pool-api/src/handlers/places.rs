//! Place handlers
//!
//! Endpoint for destination/pickup candidate search.

use axum::{
    extract::{Query, State},
    Json,
};
use pool_service::{DiscoveryService, PlaceResponse};
use serde::Deserialize;

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for place search
#[derive(Debug, Deserialize)]
pub struct PlaceQuery {
    #[serde(default)]
    pub q: String,
}

/// Search place candidates
///
/// GET /places?q=...
pub async fn search_places(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<PlaceQuery>,
) -> ApiResult<Json<Vec<PlaceResponse>>> {
    let service = DiscoveryService::new(state.service_context());
    let response = service.search_places(query.q.trim()).await?;
    Ok(Json(response))
}
