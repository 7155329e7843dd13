//! Fixed campus place catalog

use async_trait::async_trait;

use pool_core::{DomainError, LocationResolver, Place};

/// Destinations and pickup points offered when no geocoder is configured
const CATALOG: &[&str] = &[
    "JBS",
    "Viceroy family dhaba",
    "Taaza",
    "Punjabi haveli",
    "Udupi",
    "Sereno",
    "Tandoor",
    "Shameerpet Bus Stand",
    "Evergreen",
    "Village",
    "RedBucket Biryani",
    "Maruti Wine shop",
    "BPHC Main Gate",
    "Mess 1",
    "Mess 2",
    "Kondapur",
    "Miyapur",
    "Gachibowli",
    "jubilee hills",
    "nallagandla",
    "Tellapur",
    "Nanakramguda",
    "Narsingi",
    "Madhapur",
    "Banjara Hills",
    "Panjagutta",
    "Begumpet",
    "Alwal",
    "Sainikpuri",
    "JNTU",
    "Lakdi ka Pul",
];

/// Serves a fixed list of well-known campus destinations
///
/// Catalog entries carry no coordinates, so distance ranking is skipped
/// for pools created against them.
#[derive(Debug, Clone, Default)]
pub struct CatalogResolver;

impl CatalogResolver {
    /// The full catalog as places
    #[must_use]
    pub fn all(&self) -> Vec<Place> {
        CATALOG.iter().map(|name| Self::entry(name)).collect()
    }

    fn entry(name: &str) -> Place {
        Place {
            id: Some(slug(name)),
            name: name.to_string(),
            latitude: None,
            longitude: None,
            address: None,
        }
    }
}

/// Slugify a place name into a stable identifier
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_sep = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_sep = false;
        } else if !last_sep {
            out.push('_');
            last_sep = true;
        }
    }
    out.trim_end_matches('_').to_string()
}

#[async_trait]
impl LocationResolver for CatalogResolver {
    async fn search(&self, query: &str) -> Result<Vec<Place>, DomainError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Ok(self.all());
        }
        Ok(CATALOG
            .iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .map(|name| Self::entry(name))
            .collect())
    }
}
