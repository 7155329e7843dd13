//! Ports - traits implemented by the infrastructure layer

mod location;
mod repositories;

pub use location::LocationResolver;
pub use repositories::{
    JoinOutcome, MemberRepository, MessageRepository, PoolRepository, RepoResult,
};
