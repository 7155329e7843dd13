//! Location resolver port

use async_trait::async_trait;

use crate::entities::Place;
use crate::error::DomainError;

/// Resolves free-text queries into candidate places
///
/// Implementations may call an external geocoder or serve a fixed campus
/// catalog. Lookup failures degrade to an empty candidate list; they never
/// block pool creation.
#[async_trait]
pub trait LocationResolver: Send + Sync {
    /// Search for places matching a query string
    async fn search(&self, query: &str) -> Result<Vec<Place>, DomainError>;
}
