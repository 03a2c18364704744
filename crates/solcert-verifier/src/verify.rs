//! Inclusion-proof verification
//!
//! Recombines a leaf with its ordered siblings under the sorted-pair rule
//! (`parent = Keccak256(min || max)`) and compares the result against the
//! expected root. The recombination is exactly the builder's pair hash, so
//! any grammar or hashing drift between the two crates shows up as a test
//! failure, not a silent incompatibility.

use crate::error::VerifierError;
use serde::{Deserialize, Serialize};
use solcert_commitment::hash_pair;
use solcert_primitives::Hash256;

/// Result of an inclusion check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclusionCheck {
    /// Whether the proof reconstructs the expected root
    pub valid: bool,

    /// The root the recombination actually produced
    pub computed_root: Hash256,
}

/// Verify an inclusion proof against a root
pub fn verify_inclusion(root: &Hash256, leaf: &Hash256, proof: &[Hash256]) -> InclusionCheck {
    let mut current = *leaf;
    for sibling in proof {
        current = hash_pair(&current, sibling);
    }
    InclusionCheck {
        valid: current == *root,
        computed_root: current,
    }
}

/// Verify an inclusion proof given as hex strings
///
/// Every input is validated as a 32-byte hex value (with or without a `0x`
/// prefix) before any hashing happens; a malformed input is an error, not
/// an invalid proof.
pub fn verify_inclusion_hex(
    root: &str,
    leaf: &str,
    proof: &[String],
) -> Result<InclusionCheck, VerifierError> {
    let root = Hash256::from_hex(root).map_err(|e| VerifierError::invalid_hex("root", e))?;
    let leaf = Hash256::from_hex(leaf).map_err(|e| VerifierError::invalid_hex("leaf", e))?;
    let proof: Vec<Hash256> = proof
        .iter()
        .enumerate()
        .map(|(i, sibling)| {
            Hash256::from_hex(sibling)
                .map_err(|e| VerifierError::invalid_hex(format!("proof[{i}]"), e))
        })
        .collect::<Result<_, _>>()?;
    Ok(verify_inclusion(&root, &leaf, &proof))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solcert_commitment::MerkleTree;

    fn test_leaves(n: usize) -> Vec<Hash256> {
        (0..n)
            .map(|i| Hash256::keccak256(format!("leaf-{i}").as_bytes()))
            .collect()
    }

    #[test]
    fn test_single_leaf_verifies_with_empty_proof() {
        let leaf = Hash256::keccak256(b"only");
        let check = verify_inclusion(&leaf, &leaf, &[]);
        assert!(check.valid);
        assert_eq!(check.computed_root, leaf);
    }

    #[test]
    fn test_builder_proofs_verify() {
        let leaves = test_leaves(9);
        let tree = MerkleTree::from_leaves(leaves.clone()).unwrap();
        for (i, leaf) in leaves.iter().enumerate() {
            let proof = tree.proof_for_index(i).unwrap();
            assert!(verify_inclusion(&tree.root(), leaf, &proof).valid);
        }
    }

    #[test]
    fn test_invalid_proof_reports_computed_root() {
        let leaves = test_leaves(4);
        let tree = MerkleTree::from_leaves(leaves.clone()).unwrap();
        let check = verify_inclusion(&tree.root(), &leaves[0], &[]);
        assert!(!check.valid);
        assert_eq!(check.computed_root, leaves[0]);
    }

    #[test]
    fn test_hex_entry_point_round_trips() {
        let leaves = test_leaves(5);
        let tree = MerkleTree::from_leaves(leaves.clone()).unwrap();
        let proof_hex: Vec<String> = tree
            .proof_for_index(3)
            .unwrap()
            .iter()
            .map(Hash256::to_hex_prefixed)
            .collect();
        let check = verify_inclusion_hex(
            &tree.root().to_hex_prefixed(),
            &leaves[3].to_hex_prefixed(),
            &proof_hex,
        )
        .unwrap();
        assert!(check.valid);
    }

    #[test]
    fn test_malformed_root_is_an_error() {
        let err = verify_inclusion_hex("0x1234", &Hash256::zero().to_hex_prefixed(), &[])
            .unwrap_err();
        assert!(matches!(err, VerifierError::InvalidHex { ref field, .. } if field == "root"));
    }

    #[test]
    fn test_malformed_proof_element_names_its_index() {
        let root = Hash256::zero().to_hex_prefixed();
        let err = verify_inclusion_hex(&root, &root, &["garbage".to_string()]).unwrap_err();
        assert!(
            matches!(err, VerifierError::InvalidHex { ref field, .. } if field == "proof[0]")
        );
    }
}
