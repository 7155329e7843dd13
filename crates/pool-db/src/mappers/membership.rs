//! Membership entity <-> model mapper

use pool_core::{Membership, Uid};

use crate::models::MembershipModel;

/// Convert MembershipModel to Membership entity
impl From<MembershipModel> for Membership {
    fn from(model: MembershipModel) -> Self {
        Membership {
            pool_id: Uid::new(model.pool_id),
            name: model.name,
            email: model.email,
            joined_at: model.joined_at,
        }
    }
}
