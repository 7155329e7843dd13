//! # pool-core
//!
//! Domain layer containing entities, value objects, repository traits, and
//! the location-resolver port. This crate has zero dependencies on
//! infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod geo;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Identity, Membership, Message, Place, Pool, PoolWithMembers, TransportMode, COOLDOWN_MINUTES,
    MESSAGE_FETCH_LIMIT, SEATS_MAX, SEATS_MIN,
};
pub use error::DomainError;
pub use geo::haversine_km;
pub use traits::{
    JoinOutcome, LocationResolver, MemberRepository, MessageRepository, PoolRepository, RepoResult,
};
pub use value_objects::{Uid, UidGenerator, UidParseError};
