//! Identity gate - turns caller-supplied credentials into trusted identities
//!
//! Two entry paths exist. When an assertion secret is configured, callers
//! present a signed identity assertion (a JWT minted by the sign-in frontend
//! after the OAuth exchange) and the gate verifies the signature. Without a
//! secret the gate accepts self-asserted name/email pairs, which is only
//! suitable for development. Both paths enforce the institutional domain.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use pool_core::Identity;

/// Claims carried by a signed identity assertion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Display name
    pub name: String,
    /// Verified email address
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Identity gate errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid or expired identity assertion")]
    InvalidAssertion,

    #[error("Signed assertions are not configured on this server")]
    AssertionsDisabled,

    #[error("Email domain not allowed: expected @{0}")]
    DomainRejected(String),
}

/// Verifies identities against the institutional email domain
#[derive(Clone)]
pub struct IdentityGate {
    allowed_domain: String,
    decoding_key: Option<DecodingKey>,
}

impl IdentityGate {
    /// Create a gate for a domain, with an optional assertion secret
    #[must_use]
    pub fn new(allowed_domain: impl Into<String>, assertion_secret: Option<&str>) -> Self {
        Self {
            allowed_domain: allowed_domain.into().to_lowercase(),
            decoding_key: assertion_secret.map(|s| DecodingKey::from_secret(s.as_bytes())),
        }
    }

    /// Whether signed assertions are enabled
    #[must_use]
    pub fn assertions_enabled(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Verify a signed identity assertion
    ///
    /// # Errors
    /// Fails when assertions are disabled, the signature or expiry is
    /// invalid, or the email falls outside the allowed domain.
    pub fn verify_assertion(&self, token: &str) -> Result<Identity, AuthError> {
        let key = self
            .decoding_key
            .as_ref()
            .ok_or(AuthError::AssertionsDisabled)?;

        let data = decode::<IdentityClaims>(token, key, &Validation::new(Algorithm::HS256))
            .map_err(|_| AuthError::InvalidAssertion)?;

        self.admit(&data.claims.name, &data.claims.email)
    }

    /// Admit a self-asserted identity after the domain check
    ///
    /// # Errors
    /// Fails when the email falls outside the allowed domain.
    pub fn admit(&self, name: &str, email: &str) -> Result<Identity, AuthError> {
        let identity = Identity::new(name, email);
        if !self.domain_allowed(&identity.email) {
            return Err(AuthError::DomainRejected(self.allowed_domain.clone()));
        }
        Ok(identity)
    }

    fn domain_allowed(&self, normalized_email: &str) -> bool {
        normalized_email.ends_with(&format!("@{}", self.allowed_domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const DOMAIN: &str = "hyderabad.bits-pilani.ac.in";
    const SECRET: &str = "test-secret";

    fn mint(name: &str, email: &str, exp: i64) -> String {
        let claims = IdentityClaims {
            name: name.to_string(),
            email: email.to_string(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn test_admit_enforces_domain() {
        let gate = IdentityGate::new(DOMAIN, None);
        assert!(gate.admit("Asha", "asha@hyderabad.bits-pilani.ac.in").is_ok());
        assert!(matches!(
            gate.admit("Eve", "eve@gmail.com"),
            Err(AuthError::DomainRejected(_))
        ));
    }

    #[test]
    fn test_admit_normalizes_case() {
        let gate = IdentityGate::new(DOMAIN, None);
        let id = gate
            .admit("Asha", "ASHA@Hyderabad.BITS-Pilani.ac.in")
            .unwrap();
        assert_eq!(id.email, "asha@hyderabad.bits-pilani.ac.in");
    }

    #[test]
    fn test_subdomain_suffix_is_not_enough() {
        // evil.com email crafted to end with the domain string but not as a suffix after '@'
        let gate = IdentityGate::new(DOMAIN, None);
        assert!(gate
            .admit("Eve", "eve@evil-hyderabad.bits-pilani.ac.in.attacker.com")
            .is_err());
    }

    #[test]
    fn test_verify_assertion_round_trip() {
        let gate = IdentityGate::new(DOMAIN, Some(SECRET));
        let token = mint("Asha", "asha@hyderabad.bits-pilani.ac.in", future_exp());
        let id = gate.verify_assertion(&token).unwrap();
        assert_eq!(id.name, "Asha");
        assert_eq!(id.email, "asha@hyderabad.bits-pilani.ac.in");
    }

    #[test]
    fn test_verify_assertion_rejects_bad_signature() {
        let gate = IdentityGate::new(DOMAIN, Some("other-secret"));
        let token = mint("Asha", "asha@hyderabad.bits-pilani.ac.in", future_exp());
        assert!(matches!(
            gate.verify_assertion(&token),
            Err(AuthError::InvalidAssertion)
        ));
    }

    #[test]
    fn test_verify_assertion_rejects_expired() {
        let gate = IdentityGate::new(DOMAIN, Some(SECRET));
        let token = mint(
            "Asha",
            "asha@hyderabad.bits-pilani.ac.in",
            chrono::Utc::now().timestamp() - 3600,
        );
        assert!(gate.verify_assertion(&token).is_err());
    }

    #[test]
    fn test_verify_assertion_rejects_wrong_domain() {
        let gate = IdentityGate::new(DOMAIN, Some(SECRET));
        let token = mint("Eve", "eve@gmail.com", future_exp());
        assert!(matches!(
            gate.verify_assertion(&token),
            Err(AuthError::DomainRejected(_))
        ));
    }

    #[test]
    fn test_assertions_disabled() {
        let gate = IdentityGate::new(DOMAIN, None);
        assert!(!gate.assertions_enabled());
        assert!(matches!(
            gate.verify_assertion("whatever"),
            Err(AuthError::AssertionsDisabled)
        ));
    }
}
