//! # pool-common
//!
//! Shared utilities including configuration, the identity gate, place
//! resolvers, and telemetry.

pub mod auth;
pub mod config;
pub mod places;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{AuthError, IdentityClaims, IdentityGate};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, IdentityConfig,
    PlacesConfig, ServerConfig,
};
pub use places::{CatalogResolver, GooglePlacesResolver};
pub use telemetry::{init_tracing, init_tracing_with_config, try_init_tracing, TracingConfig, TracingError};
