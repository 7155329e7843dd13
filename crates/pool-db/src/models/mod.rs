//! Database models
//!
//! Row structs with SQLx `FromRow` derives, converted to domain entities
//! by the mappers module.

mod membership;
mod message;
mod pool;

pub use membership::MembershipModel;
pub use message::MessageModel;
pub use pool::PoolModel;
