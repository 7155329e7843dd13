//! Request handlers
//!
//! Thin glue between the HTTP layer and the services.

pub mod health;
pub mod members;
pub mod messages;
pub mod places;
pub mod pools;
