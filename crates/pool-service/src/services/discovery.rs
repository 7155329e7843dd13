//! Discovery service
//!
//! Listing with filters, distance ranking, and deep-link pinning. Expired
//! pools are reaped lazily at the top of every listing, so no background
//! job is needed.

use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, instrument};

use pool_core::{haversine_km, PoolWithMembers};

use crate::dto::{DiscoveryFilter, PlaceResponse, PoolResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Departure-time filter half-window, in seconds
const TIME_WINDOW_SECS: i64 = 900;

/// Discovery service
pub struct DiscoveryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> DiscoveryService<'a> {
    /// Create a new DiscoveryService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List upcoming pools, filtered and ranked
    #[instrument(skip(self, filter))]
    pub async fn list_pools(&self, filter: &DiscoveryFilter) -> ServiceResult<Vec<PoolResponse>> {
        let now = Utc::now();

        // Reap before reading, so departed rides never surface
        let reaped = self.ctx.pool_repo().delete_expired(now).await?;
        if reaped > 0 {
            debug!(reaped, "Expired pools removed");
        }

        let mut listings = self.ctx.pool_repo().list_departing_after(now).await?;

        if let Some(target) = filter.time.and_then(|t| Utc.timestamp_opt(t, 0).single()) {
            listings.retain(|l| within_window(l.pool.departure_time, target));
        }

        if let Some(dest) = filter.destination.as_deref().map(str::trim) {
            if !dest.is_empty() {
                listings.retain(|l| l.pool.destination.name.trim().eq_ignore_ascii_case(dest));
            }
        }

        if let Some(pickup) = filter.pickup.as_deref().map(str::trim) {
            if !pickup.is_empty() {
                listings.retain(|l| {
                    l.pool
                        .pickup_point
                        .as_deref()
                        .map(str::trim)
                        .is_some_and(|p| p.eq_ignore_ascii_case(pickup))
                });
            }
        }

        let origin = match (filter.lat, filter.lng) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        };

        let mut responses: Vec<PoolResponse> = listings
            .iter()
            .map(|listing| {
                let mut response = PoolResponse::from(listing);
                response.distance_km = origin.and_then(|o| distance_from(o, listing));
                response
            })
            .collect();

        if origin.is_some() {
            // Nearest first; pools without coordinates sink to the end,
            // ordered by departure time among themselves
            responses.sort_by(|a, b| match (a.distance_km, b.distance_km) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.departs_at.cmp(&b.departs_at),
            });
        }

        // A shared deep link pins its pool to the front
        if let Some(pinned_id) = filter.pool {
            let pinned = pinned_id.to_string();
            if let Some(pos) = responses.iter().position(|r| r.id == pinned) {
                let mut front = responses.remove(pos);
                front.pinned = true;
                responses.insert(0, front);
            }
        }

        Ok(responses)
    }

    /// Search for place candidates
    #[instrument(skip(self))]
    pub async fn search_places(&self, query: &str) -> ServiceResult<Vec<PlaceResponse>> {
        let places = self.ctx.location_resolver().search(query).await?;
        Ok(places.iter().map(PlaceResponse::from).collect())
    }
}

fn within_window(departure: DateTime<Utc>, target: DateTime<Utc>) -> bool {
    (departure - target).num_seconds().abs() <= TIME_WINDOW_SECS
}

fn distance_from(origin: (f64, f64), listing: &PoolWithMembers) -> Option<f64> {
    listing
        .pool
        .destination
        .coordinates()
        .map(|(lat, lng)| haversine_km(origin.0, origin.1, lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_window() {
        let target = Utc::now();
        assert!(within_window(target + Duration::seconds(900), target));
        assert!(within_window(target - Duration::seconds(900), target));
        assert!(!within_window(target + Duration::seconds(901), target));
    }
}
