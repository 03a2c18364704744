//! Fuzz target for Merkle tree construction and proofs
//!
//! This target ensures:
//! 1. Tree construction never panics on any non-empty leaf set
//! 2. Construction is deterministic
//! 3. Every produced proof verifies against the root

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use solcert_commitment::MerkleTree;
use solcert_primitives::Hash256;
use solcert_verifier::verify_inclusion;

#[derive(Debug, Arbitrary)]
struct TreeInput {
    leaves: Vec<[u8; 32]>,
}

fuzz_target!(|input: TreeInput| {
    // Limit input size to keep iterations fast
    let leaves: Vec<Hash256> = input
        .leaves
        .iter()
        .take(128)
        .copied()
        .map(Hash256::from_bytes)
        .collect();

    if leaves.is_empty() {
        assert!(MerkleTree::from_leaves(vec![]).is_err());
        return;
    }

    let tree = MerkleTree::from_leaves(leaves.clone()).expect("non-empty leaves");
    let again = MerkleTree::from_leaves(leaves.clone()).expect("non-empty leaves");
    assert_eq!(tree.root(), again.root());

    let root = tree.root();
    for (i, leaf) in leaves.iter().enumerate() {
        let proof = tree.proof_for_index(i).expect("index in bounds");
        assert!(
            verify_inclusion(&root, leaf, &proof).valid,
            "proof {i} failed"
        );
    }

    // an index past the end must error, not panic
    assert!(tree.proof_for_index(leaves.len()).is_err());
});
