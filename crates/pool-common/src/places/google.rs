//! Google Places text search client

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use pool_core::{DomainError, LocationResolver, Place};

const TEXT_SEARCH_URL: &str = "https://maps.googleapis.com/maps/api/place/textsearch/json";

/// Resolves free-text queries through the Google Places API
///
/// Lookup failures are logged and degrade to an empty candidate list so
/// that pool creation never depends on the geocoder being up.
#[derive(Clone)]
pub struct GooglePlacesResolver {
    http: reqwest::Client,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<TextSearchResult>,
    status: String,
}

#[derive(Debug, Deserialize)]
struct TextSearchResult {
    place_id: String,
    name: String,
    #[serde(default)]
    formatted_address: Option<String>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

impl GooglePlacesResolver {
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    async fn text_search(&self, query: &str) -> Result<Vec<Place>, reqwest::Error> {
        let response = self
            .http
            .get(TEXT_SEARCH_URL)
            .query(&[("query", query), ("key", &self.api_key)])
            .send()
            .await?
            .error_for_status()?
            .json::<TextSearchResponse>()
            .await?;

        if response.status != "OK" && response.status != "ZERO_RESULTS" {
            warn!(status = %response.status, "place search returned non-ok status");
            return Ok(Vec::new());
        }

        Ok(response
            .results
            .into_iter()
            .map(|r| Place {
                id: Some(r.place_id),
                name: r.name,
                latitude: Some(r.geometry.location.lat),
                longitude: Some(r.geometry.location.lng),
                address: r.formatted_address,
            })
            .collect())
    }
}

#[async_trait]
impl LocationResolver for GooglePlacesResolver {
    async fn search(&self, query: &str) -> Result<Vec<Place>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        match self.text_search(query).await {
            Ok(places) => Ok(places),
            Err(e) => {
                warn!(error = %e, "place search failed, returning no candidates");
                Ok(Vec::new())
            }
        }
    }
}
