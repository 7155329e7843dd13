//! Pool entity <-> model mapper

use pool_core::{Place, Pool, TransportMode, Uid};

use crate::models::PoolModel;

/// Convert PoolModel to Pool entity
impl From<PoolModel> for Pool {
    fn from(model: PoolModel) -> Self {
        Pool {
            id: Uid::new(model.id),
            destination: Place {
                id: model.destination_id,
                name: model.destination_name,
                latitude: model.lat,
                longitude: model.lng,
                address: model.destination_address,
            },
            departure_time: model.departs_at,
            seat_capacity: model.seats,
            mode: TransportMode::parse_lossy(&model.mode),
            pickup_point: model.pickup,
            notes: model.notes,
            host_name: model.host_name,
            host_email: model.host_email,
            created_at: model.created_at,
        }
    }
}

/// Convert Pool entity reference to values for database insertion
pub struct PoolInsert<'a> {
    pub id: i64,
    pub destination_id: Option<&'a str>,
    pub destination_name: &'a str,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub destination_address: Option<&'a str>,
    pub seats: i32,
    pub mode: &'static str,
    pub notes: Option<&'a str>,
    pub host_name: &'a str,
    pub host_email: &'a str,
    pub pickup: Option<&'a str>,
}

impl<'a> PoolInsert<'a> {
    pub fn new(pool: &'a Pool) -> Self {
        Self {
            id: pool.id.into_inner(),
            destination_id: pool.destination.id.as_deref(),
            destination_name: &pool.destination.name,
            lat: pool.destination.latitude,
            lng: pool.destination.longitude,
            destination_address: pool.destination.address.as_deref(),
            seats: pool.seat_capacity,
            mode: pool.mode.as_str(),
            notes: pool.notes.as_deref(),
            host_name: &pool.host_name,
            host_email: &pool.host_email,
            pickup: pool.pickup_point.as_deref(),
        }
    }
}
