//! Value objects for the ride-pool domain

mod uid;

pub use uid::{Uid, UidGenerator, UidParseError};
