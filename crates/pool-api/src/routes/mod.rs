//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{health, members, messages, places, pools};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(pool_routes())
        .merge(place_routes())
}

/// Pool routes
fn pool_routes() -> Router<AppState> {
    Router::new()
        // Pool CRUD and discovery
        .route("/pools", post(pools::create_pool))
        .route("/pools", get(pools::list_pools))
        .route("/pools/:pool_id", get(pools::get_pool))
        .route("/pools/:pool_id", delete(pools::delete_pool))
        // Seats
        .route("/pools/:pool_id/members", get(members::get_members))
        .route("/pools/:pool_id/members/@me", put(members::join_pool))
        .route("/pools/:pool_id/members/@me", delete(members::leave_pool))
        // Chat
        .route("/pools/:pool_id/messages", get(messages::get_messages))
        .route("/pools/:pool_id/messages", post(messages::create_message))
}

/// Place search routes
fn place_routes() -> Router<AppState> {
    Router::new().route("/places", get(places::search_places))
}
