//! Minimal contract ABI layer
//!
//! The contract surface this stack reads is small and fully pinned: two
//! registry getters returning `address[]` and three events whose parameters
//! are all non-indexed static words. Decoding is therefore plain 32-byte
//! word arithmetic with exhaustive bounds and range validation — a log or
//! return payload that does not match the pinned shape is an error, never a
//! best-effort guess.

use solcert_primitives::{Address, Hash256};
use thiserror::Error;

/// Pinned signature of the issuance event
///
/// `id, owner, energyWh, issuedAt, issuer` — issuer is the final word.
pub const ISSUED_EVENT_SIG: &str = "CertificateIssued(uint256,address,uint256,uint256,address)";

/// Pinned signature of the purchase event: `id, from, to, priceWei`
pub const PURCHASED_EVENT_SIG: &str = "CertificatePurchased(uint256,address,address,uint256)";

/// Pinned signature of the retirement event: `id, owner`
pub const RETIRED_EVENT_SIG: &str = "CertificateRetired(uint256,address)";

/// Registry getter for the producer allow-list
pub const PRODUCERS_CALL_SIG: &str = "producers()";

/// Registry getter for the company allow-list
pub const COMPANIES_CALL_SIG: &str = "companies()";

/// Word size of every static ABI value
pub const WORD: usize = 32;

/// Errors raised while decoding ABI payloads
#[derive(Debug, Error)]
pub enum AbiError {
    /// Payload shorter than the requested word
    #[error("abi payload too short: {got} bytes, word {index} needs {need}")]
    ShortData {
        got: usize,
        index: usize,
        need: usize,
    },

    /// Payload length is not the pinned word count
    #[error("abi payload is {got} bytes, expected exactly {expected} words")]
    WordCountMismatch { got: usize, expected: usize },

    /// A numeric word exceeds the target integer range
    #[error("abi word {index} out of range for {target}")]
    OutOfRange { index: usize, target: &'static str },

    /// An address word carries non-zero padding
    #[error("abi word {index} is not a well-formed address")]
    MalformedAddress { index: usize },

    /// A dynamic array head points outside the payload
    #[error("abi dynamic data out of bounds: offset {offset}, length {length}, payload {got}")]
    DynamicOutOfBounds {
        offset: usize,
        length: usize,
        got: usize,
    },

    /// Hex payload did not decode
    #[error("invalid hex in {what}: {source}")]
    Hex {
        what: &'static str,
        source: hex::FromHexError,
    },
}

/// Topic 0 of an event: the Keccak-256 hash of its pinned signature
pub fn event_topic(signature: &str) -> Hash256 {
    Hash256::keccak256(signature.as_bytes())
}

/// First four bytes of the Keccak-256 hash of a function signature
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = Hash256::keccak256(signature.as_bytes());
    let mut selector = [0u8; 4];
    selector.copy_from_slice(&hash.as_bytes()[..4]);
    selector
}

/// Call data for a no-argument function: the bare selector
pub fn call_data(signature: &str) -> Vec<u8> {
    function_selector(signature).to_vec()
}

/// Decode a `0x`-prefixed hex blob into bytes
pub fn decode_hex_blob(payload: &str, what: &'static str) -> Result<Vec<u8>, AbiError> {
    let hex_body = payload.strip_prefix("0x").unwrap_or(payload);
    hex::decode(hex_body).map_err(|source| AbiError::Hex { what, source })
}

/// Borrow the 32-byte word at `index`
fn word(data: &[u8], index: usize) -> Result<&[u8], AbiError> {
    let start = index * WORD;
    let end = start + WORD;
    if data.len() < end {
        return Err(AbiError::ShortData {
            got: data.len(),
            index,
            need: end,
        });
    }
    Ok(&data[start..end])
}

/// Require the payload to be exactly `words` static words
pub fn expect_words(data: &[u8], words: usize) -> Result<(), AbiError> {
    if data.len() != words * WORD {
        return Err(AbiError::WordCountMismatch {
            got: data.len(),
            expected: words,
        });
    }
    Ok(())
}

/// Decode the word at `index` as a `u64`, rejecting larger values
pub fn decode_u64(data: &[u8], index: usize) -> Result<u64, AbiError> {
    let w = word(data, index)?;
    if w[..24].iter().any(|&b| b != 0) {
        return Err(AbiError::OutOfRange {
            index,
            target: "u64",
        });
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&w[24..]);
    Ok(u64::from_be_bytes(bytes))
}

/// Decode the word at `index` as a `u128`, rejecting larger values
pub fn decode_u128(data: &[u8], index: usize) -> Result<u128, AbiError> {
    let w = word(data, index)?;
    if w[..16].iter().any(|&b| b != 0) {
        return Err(AbiError::OutOfRange {
            index,
            target: "u128",
        });
    }
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&w[16..]);
    Ok(u128::from_be_bytes(bytes))
}

/// Decode the word at `index` as an address, rejecting dirty padding
pub fn decode_address(data: &[u8], index: usize) -> Result<Address, AbiError> {
    let w = word(data, index)?;
    if w[..12].iter().any(|&b| b != 0) {
        return Err(AbiError::MalformedAddress { index });
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&w[12..]);
    Ok(Address::from_bytes(bytes))
}

/// Decode an `address[]` function return
///
/// Layout: one offset word pointing at the array head, a length word, then
/// one address word per element. Every bound is checked against the actual
/// payload before any element decodes.
pub fn decode_address_array(data: &[u8]) -> Result<Vec<Address>, AbiError> {
    let offset = decode_u64(data, 0)? as usize;
    let head_end = offset.checked_add(WORD);
    if offset % WORD != 0 || head_end.map(|e| e > data.len()).unwrap_or(true) {
        return Err(AbiError::DynamicOutOfBounds {
            offset,
            length: 0,
            got: data.len(),
        });
    }

    let head = &data[offset..];
    let length = decode_u64(head, 0)? as usize;
    let need = length
        .checked_add(1)
        .and_then(|words| words.checked_mul(WORD));
    if need.map(|n| head.len() < n).unwrap_or(true) {
        return Err(AbiError::DynamicOutOfBounds {
            offset,
            length,
            got: data.len(),
        });
    }

    (0..length)
        .map(|i| decode_address(head, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_u64(value: u64) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[24..].copy_from_slice(&value.to_be_bytes());
        w
    }

    fn word_address(byte: u8) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[12..].fill(byte);
        w
    }

    #[test]
    fn test_event_topic_is_signature_keccak() {
        let topic = event_topic(ISSUED_EVENT_SIG);
        assert_eq!(topic, Hash256::keccak256(ISSUED_EVENT_SIG.as_bytes()));
        // the three event topics are pairwise distinct
        assert_ne!(topic, event_topic(PURCHASED_EVENT_SIG));
        assert_ne!(topic, event_topic(RETIRED_EVENT_SIG));
    }

    #[test]
    fn test_function_selector_is_first_four_bytes() {
        let selector = function_selector(PRODUCERS_CALL_SIG);
        let hash = Hash256::keccak256(PRODUCERS_CALL_SIG.as_bytes());
        assert_eq!(selector, hash.as_bytes()[..4]);
        assert_eq!(call_data(PRODUCERS_CALL_SIG), selector.to_vec());
    }

    #[test]
    fn test_decode_u64_round_trip() {
        let data = word_u64(123_456);
        assert_eq!(decode_u64(&data, 0).unwrap(), 123_456);
    }

    #[test]
    fn test_decode_u64_rejects_overflow() {
        let mut data = [0u8; 32];
        data[0] = 1; // bit far above u64 range
        assert!(matches!(
            decode_u64(&data, 0),
            Err(AbiError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_decode_address_rejects_dirty_padding() {
        let mut data = word_address(0xaa);
        data[0] = 0xff;
        assert!(matches!(
            decode_address(&data, 0),
            Err(AbiError::MalformedAddress { index: 0 })
        ));
    }

    #[test]
    fn test_decode_short_payload() {
        let data = [0u8; 16];
        assert!(matches!(
            decode_u64(&data, 0),
            Err(AbiError::ShortData { .. })
        ));
    }

    #[test]
    fn test_expect_words() {
        assert!(expect_words(&[0u8; 64], 2).is_ok());
        assert!(matches!(
            expect_words(&[0u8; 63], 2),
            Err(AbiError::WordCountMismatch { got: 63, expected: 2 })
        ));
    }

    #[test]
    fn test_decode_address_array() {
        // offset 0x20, length 2, two address words
        let mut data = Vec::new();
        data.extend_from_slice(&word_u64(32));
        data.extend_from_slice(&word_u64(2));
        data.extend_from_slice(&word_address(0xaa));
        data.extend_from_slice(&word_address(0xbb));

        let addrs = decode_address_array(&data).unwrap();
        assert_eq!(addrs.len(), 2);
        assert_eq!(addrs[0], Address::from_bytes([0xaa; 20]));
        assert_eq!(addrs[1], Address::from_bytes([0xbb; 20]));
    }

    #[test]
    fn test_decode_empty_address_array() {
        let mut data = Vec::new();
        data.extend_from_slice(&word_u64(32));
        data.extend_from_slice(&word_u64(0));
        assert_eq!(decode_address_array(&data).unwrap(), Vec::new());
    }

    #[test]
    fn test_decode_address_array_rejects_truncated_payload() {
        // claims 3 elements but carries only 1
        let mut data = Vec::new();
        data.extend_from_slice(&word_u64(32));
        data.extend_from_slice(&word_u64(3));
        data.extend_from_slice(&word_address(0xaa));
        assert!(matches!(
            decode_address_array(&data),
            Err(AbiError::DynamicOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_decode_address_array_rejects_wild_offset() {
        let data = word_u64(4096);
        assert!(matches!(
            decode_address_array(&data),
            Err(AbiError::DynamicOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_decode_hex_blob() {
        assert_eq!(decode_hex_blob("0x00ff", "data").unwrap(), vec![0, 255]);
        assert!(decode_hex_blob("0xzz", "data").is_err());
    }
}
