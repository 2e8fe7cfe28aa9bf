//! Strongly-typed identifiers for the order domain.

use core::fmt;
use core::str::FromStr;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Human-readable order identifier: `ORD-<yyyymmdd>-<6 uppercase alphanum>`.
///
/// Generation is best-effort: the date prefix plus six random characters makes
/// collisions unlikely but **not impossible**. Strict uniqueness is enforced at
/// the repository, which refuses to overwrite an existing aggregate on first
/// save.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Generate a fresh identifier from the current date and a random suffix.
    pub fn generate() -> Self {
        let date = Utc::now().format("%Y%m%d");
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        Self(format!("ORD-{date}-{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(value: &str) -> bool {
        let Some(rest) = value.strip_prefix("ORD-") else {
            return false;
        };
        let Some((date, suffix)) = rest.split_once('-') else {
            return false;
        };
        date.len() == 8
            && date.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for OrderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_well_formed(s) {
            return Err(DomainError::InvalidOrderId(s.to_owned()));
        }
        Ok(Self(s.to_owned()))
    }
}

/// Opaque identifier of a line item within an order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(Uuid);

impl LineItemId {
    /// Create a new identifier (UUIDv7, time-ordered).
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for LineItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LineItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_shape(id: &str) {
        let rest = id.strip_prefix("ORD-").expect("ORD- prefix");
        let (date, suffix) = rest.split_once('-').expect("date-suffix separator");
        assert_eq!(date.len(), 8);
        assert!(date.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(suffix.len(), 6);
        assert!(
            suffix
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        );
    }

    #[test]
    fn generated_ids_match_the_documented_shape() {
        for _ in 0..100 {
            assert_shape(OrderId::generate().as_str());
        }
    }

    #[test]
    fn parse_accepts_well_formed_ids() {
        let id: OrderId = "ORD-20251101-A3F7B2".parse().unwrap();
        assert_eq!(id.as_str(), "ORD-20251101-A3F7B2");
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for bad in [
            "",
            "ORD-20251101-a3f7b2",
            "ORD-2025110-A3F7B2",
            "ORD-20251101-A3F7B",
            "ORD-20251101A3F7B2",
            "XYZ-20251101-A3F7B2",
            "ORD-2025AB01-A3F7B2",
        ] {
            let err = bad.parse::<OrderId>().unwrap_err();
            assert_eq!(err, DomainError::InvalidOrderId(bad.to_owned()));
        }
    }

    #[test]
    fn line_item_ids_are_distinct() {
        assert_ne!(LineItemId::new(), LineItemId::new());
    }
}
