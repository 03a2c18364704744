//! Sorted-pair Merkle tree
//!
//! Binary Merkle tree over an ordered leaf sequence. Siblings are ordered
//! lexicographically before concatenation (`parent = Keccak256(min || max)`),
//! so a proof verifies without knowing whether its leaf was a left or right
//! child. A level with an odd node count promotes its last node unchanged to
//! the next level; nothing is duplicated.

use crate::error::{CommitmentError, CommitmentResult};
use solcert_primitives::Hash256;

/// Hash a sibling pair in canonical (sorted) order
pub fn hash_pair(left: &Hash256, right: &Hash256) -> Hash256 {
    let (lo, hi) = if left <= right {
        (left, right)
    } else {
        (right, left)
    };
    let mut preimage = [0u8; 64];
    preimage[..32].copy_from_slice(lo.as_bytes());
    preimage[32..].copy_from_slice(hi.as_bytes());
    Hash256::keccak256(&preimage)
}

/// A binary Merkle tree with sorted-pair hashing
///
/// Leaf order is preserved exactly as given; sorting happens only inside
/// each pair hash. The tree keeps every level so proofs are a plain walk.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// Node hashes by level; level 0 is the leaves, the last level is the root
    levels: Vec<Vec<Hash256>>,
}

impl MerkleTree {
    /// Build a tree from an ordered, non-empty leaf sequence
    pub fn from_leaves(leaves: Vec<Hash256>) -> CommitmentResult<Self> {
        if leaves.is_empty() {
            return Err(CommitmentError::EmptyTree);
        }

        let mut levels = vec![leaves];
        while levels
            .last()
            .map(|level| level.len() > 1)
            .unwrap_or(false)
        {
            let current = &levels[levels.len() - 1];
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                if pair.len() == 2 {
                    next.push(hash_pair(&pair[0], &pair[1]));
                } else {
                    // odd trailing node: promoted unchanged
                    next.push(pair[0]);
                }
            }
            levels.push(next);
        }

        Ok(Self { levels })
    }

    /// The top hash
    pub fn root(&self) -> Hash256 {
        // levels is never empty and the last level always has one node
        self.levels[self.levels.len() - 1][0]
    }

    /// Leaves in their original order
    pub fn leaves(&self) -> &[Hash256] {
        &self.levels[0]
    }

    /// Number of leaves
    pub fn num_leaves(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of levels above the leaves
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Inclusion proof for the leaf at `index`: ordered sibling hashes from
    /// the leaf level up to (excluding) the root
    ///
    /// A promoted node contributes no sibling at its level, so proofs may be
    /// shorter than `depth()`.
    pub fn proof_for_index(&self, index: usize) -> CommitmentResult<Vec<Hash256>> {
        if index >= self.num_leaves() {
            return Err(CommitmentError::IndexOutOfBounds {
                index,
                len: self.num_leaves(),
            });
        }

        let mut siblings = Vec::new();
        let mut position = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = position ^ 1;
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            position /= 2;
        }
        Ok(siblings)
    }

    /// Recompute a root from a leaf and its proof under the sorted-pair rule
    pub fn verify_inclusion(root: &Hash256, leaf: &Hash256, proof: &[Hash256]) -> bool {
        let mut current = *leaf;
        for sibling in proof {
            current = hash_pair(&current, sibling);
        }
        current == *root
    }
}
