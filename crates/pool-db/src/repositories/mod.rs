//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in pool-core.

mod error;
mod member;
mod message;
mod pool;

pub use member::SqliteMemberRepository;
pub use message::SqliteMessageRepository;
pub use pool::SqlitePoolRepository;
