//! Place resolvers
//!
//! Two `LocationResolver` implementations: the fixed campus catalog (no
//! external calls) and a Google Places client used when an API key is
//! configured.

mod catalog;
mod google;

pub use catalog::CatalogResolver;
pub use google::GooglePlacesResolver;
