//! Uid - time-ordered 64-bit unique identifier
//!
//! Structure:
//! - Bits 63-16: Timestamp (milliseconds since custom epoch)
//! - Bits 15-0:  Sequence number (0-65535)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time-ordered 64-bit identifier for pools and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Uid(i64);

impl Uid {
    /// Custom epoch: 2024-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1704067200000;

    /// Create a new Uid from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the Uid is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Extract timestamp (milliseconds since Unix epoch)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        (self.0 >> 16) + Self::EPOCH
    }

    /// Extract sequence number (0-65535)
    #[inline]
    pub fn sequence(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Convert timestamp to DateTime<Utc>
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp())
            .single()
            .unwrap_or_default()
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, UidParseError> {
        s.parse::<i64>()
            .map(Uid)
            .map_err(|_| UidParseError::InvalidFormat)
    }
}

/// Error when parsing a Uid from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UidParseError {
    #[error("invalid uid format")]
    InvalidFormat,
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Uid {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Uid> for i64 {
    fn from(id: Uid) -> Self {
        id.0
    }
}

impl std::str::FromStr for Uid {
    type Err = UidParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uid::parse(s)
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Uid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Uid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct UidVisitor;

        impl<'de> Visitor<'de> for UidVisitor {
            type Value = Uid;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing a uid")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Uid, E>
            where
                E: de::Error,
            {
                Ok(Uid(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Uid, E>
            where
                E: de::Error,
            {
                Ok(Uid(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Uid, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(Uid)
                    .map_err(|_| de::Error::custom("invalid uid string"))
            }
        }

        deserializer.deserialize_any(UidVisitor)
    }
}

/// Thread-safe Uid generator
///
/// Generates unique IDs at up to 65536 per millisecond using lock-free
/// atomic operations.
pub struct UidGenerator {
    sequence: AtomicI64,
    last_timestamp: AtomicI64,
}

impl UidGenerator {
    /// Create a new generator
    pub const fn new() -> Self {
        Self {
            sequence: AtomicI64::new(0),
            last_timestamp: AtomicI64::new(0),
        }
    }

    /// Generate a new unique Uid
    pub fn generate(&self) -> Uid {
        loop {
            let mut timestamp = self.current_timestamp();
            let last = self.last_timestamp.load(Ordering::Acquire);

            if timestamp < last {
                // Clock moved backwards, wait for it to catch up
                std::thread::sleep(std::time::Duration::from_millis((last - timestamp) as u64));
                timestamp = self.current_timestamp();
            }

            let sequence = if timestamp == last {
                self.sequence.fetch_add(1, Ordering::Relaxed) & 0xFFFF
            } else {
                self.sequence.store(1, Ordering::Relaxed);
                0
            };

            match self.last_timestamp.compare_exchange(
                last,
                timestamp,
                Ordering::Release,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    let id = ((timestamp - Uid::EPOCH) << 16) | sequence;
                    return Uid::new(id);
                }
                Err(_) => {
                    // Another thread updated timestamp, retry
                    continue;
                }
            }
        }
    }

    /// Get current timestamp in milliseconds since Unix epoch
    #[inline]
    fn current_timestamp(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for UidGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uid_creation() {
        let id = Uid::new(123456789);
        assert_eq!(id.into_inner(), 123456789);
    }

    #[test]
    fn test_uid_zero() {
        let id = Uid::default();
        assert!(id.is_zero());

        let id = Uid::new(1);
        assert!(!id.is_zero());
    }

    #[test]
    fn test_uid_parse() {
        let id = Uid::parse("123456789").unwrap();
        assert_eq!(id.into_inner(), 123456789);

        assert!(Uid::parse("invalid").is_err());
    }

    #[test]
    fn test_uid_serialize_json() {
        let id = Uid::new(123456789012345678);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123456789012345678\"");
    }

    #[test]
    fn test_uid_deserialize_string_and_number() {
        let id: Uid = serde_json::from_str("\"123456789012345678\"").unwrap();
        assert_eq!(id.into_inner(), 123456789012345678);

        let id: Uid = serde_json::from_str("12345").unwrap();
        assert_eq!(id.into_inner(), 12345);
    }

    #[test]
    fn test_generator_creates_unique_ids() {
        let gen = UidGenerator::new();
        let mut ids = HashSet::new();

        for _ in 0..1000 {
            let id = gen.generate();
            assert!(ids.insert(id), "Duplicate ID generated");
        }
    }

    #[test]
    fn test_generator_ids_are_monotonic() {
        let gen = UidGenerator::new();
        let mut last = Uid::new(0);

        for _ in 0..1000 {
            let id = gen.generate();
            assert!(id > last, "IDs should be monotonically increasing");
            last = id;
        }
    }

    #[test]
    fn test_uid_timestamp_extraction() {
        let gen = UidGenerator::new();
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        let id = gen.generate();

        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_millis() as i64;

        let timestamp = id.timestamp();
        assert!(
            timestamp >= before && timestamp <= after,
            "Timestamp should be within generation window"
        );
    }
}
