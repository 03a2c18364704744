//! Account addresses
//!
//! Addresses enter the system as hex strings from JSON-RPC payloads or CLI
//! arguments and are validated here, once, at the boundary. After parsing an
//! address is 20 raw bytes, so equality is case-insensitive by construction
//! and the registry resolver never has to normalize casing.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing an account address
#[derive(Debug, Error)]
pub enum AddressError {
    /// Wrong number of hex digits (40 expected)
    #[error("invalid address length: {0} hex digits, expected 40")]
    InvalidLength(usize),

    /// Non-hex characters in the address body
    #[error("invalid hex in address: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// A 20-byte account address
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    /// Create from bytes
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Parse from a hex string, with or without a `0x` prefix
    ///
    /// Both checksummed (mixed-case) and lowercase forms are accepted; the
    /// checksum itself is not verified, matching how the upstream registry
    /// compares addresses.
    pub fn from_hex(hex: &str) -> Result<Self, AddressError> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        if hex.len() != 40 {
            return Err(AddressError::InvalidLength(hex.len()));
        }
        let bytes: Vec<u8> = hex::decode(hex)?;
        let mut arr = [0u8; 20];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }

    /// Convert to a `0x`-prefixed hex string (lowercase)
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex_prefixed())
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_prefixed())
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEV_DEPLOYER: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn test_parse_checksummed_and_lowercase_agree() {
        let upper = Address::from_hex(DEV_DEPLOYER).unwrap();
        let lower = Address::from_hex(&DEV_DEPLOYER.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_without_prefix() {
        let addr = Address::from_hex(&DEV_DEPLOYER[2..]).unwrap();
        assert_eq!(addr.to_hex_prefixed(), DEV_DEPLOYER.to_lowercase());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(
            Address::from_hex("0xabcd"),
            Err(AddressError::InvalidLength(4))
        ));
        // a 32-byte hash is not an address
        let hash_like = format!("0x{}", "ab".repeat(32));
        assert!(Address::from_hex(&hash_like).is_err());
    }

    #[test]
    fn test_rejects_non_hex() {
        let bad = format!("0x{}", "zz".repeat(20));
        assert!(matches!(
            Address::from_hex(&bad),
            Err(AddressError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_display_is_lowercase_prefixed() {
        let addr = Address::from_hex(DEV_DEPLOYER).unwrap();
        assert_eq!(addr.to_string(), DEV_DEPLOYER.to_lowercase());
    }

    #[test]
    fn test_serde_round_trip() {
        let addr = Address::from_hex(DEV_DEPLOYER).unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(addr, back);
    }
}
