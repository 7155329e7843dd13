//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::{COOLDOWN_MINUTES, SEATS_MAX, SEATS_MIN};
use crate::value_objects::Uid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Pool not found: {0}")]
    PoolNotFound(Uid),

    #[error("Member not found in pool")]
    MemberNotFound,

    #[error("Place not found: {0}")]
    PlaceNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Destination is required")]
    DestinationRequired,

    #[error("Departure time must be in the future")]
    DepartureInPast,

    #[error("Pickup point is required for airport rides")]
    PickupRequiredForAirport,

    #[error("Seats must be between {SEATS_MIN} and {SEATS_MAX}")]
    SeatsOutOfRange,

    #[error("Message content cannot be empty")]
    EmptyMessage,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the pool host")]
    NotPoolHost,

    #[error("Not a member of this pool")]
    NotPoolMember,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Please wait before creating another pool (cooldown: {COOLDOWN_MINUTES} minutes)")]
    CooldownActive,

    #[error("This ride has already departed")]
    RidePassed,

    #[error("Pool is full")]
    PoolFull,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::PoolNotFound(_) => "UNKNOWN_POOL",
            Self::MemberNotFound => "UNKNOWN_MEMBER",
            Self::PlaceNotFound(_) => "UNKNOWN_PLACE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::DestinationRequired => "DESTINATION_REQUIRED",
            Self::DepartureInPast => "DEPARTURE_IN_PAST",
            Self::PickupRequiredForAirport => "PICKUP_REQUIRED",
            Self::SeatsOutOfRange => "SEATS_OUT_OF_RANGE",
            Self::EmptyMessage => "EMPTY_MESSAGE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotPoolHost => "NOT_POOL_HOST",
            Self::NotPoolMember => "NOT_POOL_MEMBER",

            // Business Rules
            Self::CooldownActive => "COOLDOWN_ACTIVE",
            Self::RidePassed => "RIDE_PASSED",
            Self::PoolFull => "POOL_FULL",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PoolNotFound(_) | Self::MemberNotFound | Self::PlaceNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::DestinationRequired
                | Self::DepartureInPast
                | Self::PickupRequiredForAirport
                | Self::SeatsOutOfRange
                | Self::EmptyMessage
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPoolHost | Self::NotPoolMember)
    }

    /// Check if this is a business-rule conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::CooldownActive | Self::RidePassed | Self::PoolFull)
    }
}
