//! Service layer
//!
//! Business logic on top of the repository ports. Services borrow a
//! `ServiceContext` and stay cheap to construct per request.

mod chat;
mod context;
mod discovery;
mod error;
mod pool;

pub use chat::ChatService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use discovery::DiscoveryService;
pub use error::{ServiceError, ServiceResult};
pub use pool::PoolService;
