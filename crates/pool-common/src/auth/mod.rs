//! Identity gate

mod gate;

pub use gate::{AuthError, IdentityClaims, IdentityGate};
