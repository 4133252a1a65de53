//! Value types shared between the hook and oracle modules.

use alloy::primitives::B256;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Opaque identifier of a pool instance.
///
/// The consuming protocol derives this as a hash over the full pool key
/// (currencies, fee, tick spacing, hook address). This crate never inspects
/// the contents; it only keys oracle updates by it.
///
/// Serializes as a 0x-prefixed hex string, same as every other 32-byte value
/// on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(B256);

impl PoolId {
    /// Wraps a raw 32-byte identifier.
    pub const fn new(id: B256) -> Self {
        Self(id)
    }

    /// The raw 32-byte value.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0.0
    }

    /// The underlying hash value.
    pub const fn into_inner(self) -> B256 {
        self.0
    }
}

impl From<B256> for PoolId {
    fn from(id: B256) -> Self {
        Self(id)
    }
}

impl From<[u8; 32]> for PoolId {
    fn from(bytes: [u8; 32]) -> Self {
        Self(B256::from(bytes))
    }
}

impl Display for PoolId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl FromStr for PoolId {
    type Err = alloy::hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::b256;

    #[test]
    fn test_display_is_prefixed_hex() {
        let id = PoolId::from(b256!(
            "0x00000000000000000000000000000000000000000000000000000000000000ff"
        ));
        assert_eq!(
            id.to_string(),
            "0x00000000000000000000000000000000000000000000000000000000000000ff"
        );
    }

    #[test]
    fn test_parse_roundtrip() {
        let id = PoolId::from(b256!(
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
        ));
        let parsed: PoolId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("0x1234".parse::<PoolId>().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = PoolId::from(b256!(
            "0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
        ));
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(
            json,
            "\"0x1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef\""
        );
        let back: PoolId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
