//! Entity ↔ model mappers

mod membership;
mod message;
mod pool;

pub use pool::PoolInsert;
