//! Authentication extractor
//!
//! Extracts an identity from the request and runs it through the identity
//! gate. With signed assertions enabled the bearer token is verified; in
//! development mode self-asserted `x-user-name` / `x-user-email` headers
//! are accepted. The domain check applies on both paths.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pool_core::Identity;

use crate::response::ApiError;
use crate::state::AppState;

/// Self-asserted identity headers (development mode only)
const USER_NAME_HEADER: &str = "x-user-name";
const USER_EMAIL_HEADER: &str = "x-user-email";

/// Authenticated user extracted from the request
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Verified campus identity
    pub identity: Identity,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let gate = app_state.identity_gate();

        // Bearer assertion first
        if let Ok(TypedHeader(Authorization(bearer))) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state).await
        {
            let identity = gate.verify_assertion(bearer.token()).map_err(|e| {
                tracing::warn!(error = %e, "Identity assertion rejected");
                ApiError::Auth(e)
            })?;
            return Ok(AuthUser::new(identity));
        }

        // Self-asserted headers are only honored when assertions are off
        if gate.assertions_enabled() {
            return Err(ApiError::MissingAuth);
        }

        let name = header_str(parts, USER_NAME_HEADER).ok_or(ApiError::MissingAuth)?;
        let email = header_str(parts, USER_EMAIL_HEADER).ok_or(ApiError::MissingAuth)?;

        let identity = gate.admit(&name, &email).map_err(|e| {
            tracing::warn!(error = %e, "Self-asserted identity rejected");
            ApiError::Auth(e)
        })?;

        Ok(AuthUser::new(identity))
    }
}

fn header_str(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}
