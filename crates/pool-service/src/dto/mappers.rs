//! Entity -> response DTO mappers

use pool_core::{Membership, Message, Place, PoolWithMembers};

use super::responses::{MemberResponse, MessageResponse, PlaceResponse, PoolResponse};

impl From<&Place> for PlaceResponse {
    fn from(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            latitude: place.latitude,
            longitude: place.longitude,
            address: place.address.clone(),
        }
    }
}

impl From<&Membership> for MemberResponse {
    fn from(member: &Membership) -> Self {
        Self {
            name: member.name.clone(),
            email: member.email.clone(),
            joined_at: member.joined_at,
        }
    }
}

impl From<&PoolWithMembers> for PoolResponse {
    fn from(listing: &PoolWithMembers) -> Self {
        let pool = &listing.pool;
        Self {
            id: pool.id.to_string(),
            destination: PlaceResponse::from(&pool.destination),
            departs_at: pool.departure_time,
            seats: pool.seat_capacity,
            seats_taken: listing.members.len() as i64,
            mode: pool.mode,
            pickup: pool.pickup_point.clone(),
            notes: pool.notes.clone(),
            host_name: pool.host_name.clone(),
            host_email: pool.host_email.clone(),
            created_at: pool.created_at,
            members: listing.members.iter().map(MemberResponse::from).collect(),
            distance_km: None,
            pinned: false,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id.to_string(),
            sender_name: message.sender_name.clone(),
            sender_email: message.sender_email.clone(),
            content: message.content.clone(),
            created_at: message.created_at,
        }
    }
}
