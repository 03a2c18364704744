//! Leaf encoding
//!
//! A leaf commits to one event as `Keccak256(label || "|" || txHash)` where
//! both parts are UTF-8 and the transaction hash is in its 0x-prefixed
//! lowercase hex form. The delimiter and the label grammar are frozen:
//! downstream verifiers recompute leaves byte-for-byte from the same inputs.

use crate::label::Label;
use solcert_primitives::Hash256;

/// Delimiter between the label and the transaction hash in a leaf preimage
pub const LEAF_DELIMITER: &str = "|";

/// Encode a `(label, txHash)` pair into its 32-byte leaf
///
/// Pure function: the same inputs always produce the same leaf.
pub fn leaf_hash(label: &Label, tx_hash: &Hash256) -> Hash256 {
    let preimage = format!(
        "{}{}{}",
        label,
        LEAF_DELIMITER,
        tx_hash.to_hex_prefixed()
    );
    Hash256::keccak256(preimage.as_bytes())
}
