//! Domain entities

mod identity;
mod membership;
mod message;
mod place;
mod pool;

pub use identity::Identity;
pub use membership::Membership;
pub use message::{Message, MESSAGE_FETCH_LIMIT};
pub use place::Place;
pub use pool::{Pool, PoolWithMembers, TransportMode, COOLDOWN_MINUTES, SEATS_MAX, SEATS_MIN};
