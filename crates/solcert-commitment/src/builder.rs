//! Commitment construction
//!
//! `build_commitment` is the pure core of the stack: given a registry
//! snapshot and the two event classes fetched from the ledger, it merges the
//! events into discovery order, resolves labels, encodes leaves and builds
//! the tree. The returned `MerkleCommitment` retains the tree for the
//! lifetime of the request and answers proof queries as a method call; the
//! JSON-facing shape is a plain `{root, leavesHex}` summary.

use crate::error::{CommitmentError, CommitmentResult};
use crate::label::Label;
use crate::leaf::leaf_hash;
use crate::registry::RegistrySnapshot;
use crate::tree::MerkleTree;
use serde::{Deserialize, Serialize};
use solcert_primitives::{CertificateEvent, Hash256, IssuedEvent, PurchasedEvent};

/// One committed event with its resolved label and leaf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentLeaf {
    /// Rendered slot label, e.g. `P1_ID5`
    pub label: String,

    /// Transaction the event was emitted in
    pub tx_hash: Hash256,

    /// Keccak-256 leaf committed into the tree
    pub leaf: Hash256,
}

/// JSON summary of a commitment: `{root, leavesHex}`
///
/// `root` is `null` when no events were found in range — a valid
/// "no activity" result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentSummary {
    /// Top hash, 0x-prefixed, or `null` for an empty commitment
    pub root: Option<String>,

    /// Leaves in discovery order, 0x-prefixed
    pub leaves_hex: Vec<String>,
}

/// A built Merkle commitment over certificate lifecycle events
///
/// Holds the tree for proof queries; rebuilt from fresh ledger data on every
/// request and never persisted.
#[derive(Debug, Clone)]
pub struct MerkleCommitment {
    entries: Vec<CommitmentLeaf>,
    tree: Option<MerkleTree>,
}

impl MerkleCommitment {
    /// Build a commitment from already-labeled entries
    ///
    /// An empty entry list yields a rootless commitment.
    pub fn from_entries(entries: Vec<CommitmentLeaf>) -> Self {
        let tree = if entries.is_empty() {
            None
        } else {
            // non-empty by the branch above, so construction cannot fail
            MerkleTree::from_leaves(entries.iter().map(|e| e.leaf).collect()).ok()
        };
        Self { entries, tree }
    }

    /// The top hash, or `None` for an empty commitment
    pub fn root(&self) -> Option<Hash256> {
        self.tree.as_ref().map(MerkleTree::root)
    }

    /// Labeled entries in discovery order
    pub fn entries(&self) -> &[CommitmentLeaf] {
        &self.entries
    }

    /// Leaf hashes in discovery order
    pub fn leaves(&self) -> Vec<Hash256> {
        self.entries.iter().map(|e| e.leaf).collect()
    }

    /// Number of committed events
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the commitment covers zero events
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inclusion proof for a leaf, by value
    pub fn proof_for_leaf(&self, leaf: &Hash256) -> CommitmentResult<Vec<Hash256>> {
        let tree = self
            .tree
            .as_ref()
            .ok_or_else(|| CommitmentError::LeafNotFound(leaf.to_hex_prefixed()))?;
        let index = self
            .entries
            .iter()
            .position(|e| &e.leaf == leaf)
            .ok_or_else(|| CommitmentError::LeafNotFound(leaf.to_hex_prefixed()))?;
        tree.proof_for_index(index)
    }

    /// Inclusion proof for a leaf given as a hex string
    ///
    /// A string that does not parse as a 32-byte hex value is by definition
    /// not a leaf of this tree, so it reports `LeafNotFound` like any other
    /// absent leaf.
    pub fn proof_for(&self, leaf_hex: &str) -> CommitmentResult<Vec<Hash256>> {
        let leaf = Hash256::from_hex(leaf_hex)
            .map_err(|_| CommitmentError::LeafNotFound(leaf_hex.to_string()))?;
        self.proof_for_leaf(&leaf)
    }

    /// The `{root, leavesHex}` wire form
    pub fn summary(&self) -> CommitmentSummary {
        CommitmentSummary {
            root: self.root().map(|r| r.to_hex_prefixed()),
            leaves_hex: self
                .entries
                .iter()
                .map(|e| e.leaf.to_hex_prefixed())
                .collect(),
        }
    }
}

impl Serialize for MerkleCommitment {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.summary().serialize(serializer)
    }
}

/// Build a commitment over both event classes
///
/// Events are merged and ordered by ascending `(blockNumber, logIndex)`;
/// that discovery order is what `leavesHex` preserves. Labels resolve
/// against the given registry snapshot.
pub fn build_commitment(
    registry: &RegistrySnapshot,
    issued: Vec<IssuedEvent>,
    purchased: Vec<PurchasedEvent>,
) -> MerkleCommitment {
    let mut events: Vec<CertificateEvent> = issued
        .into_iter()
        .map(CertificateEvent::Issued)
        .chain(purchased.into_iter().map(CertificateEvent::Purchased))
        .collect();
    events.sort_by_key(CertificateEvent::order_key);

    let entries = events
        .iter()
        .map(|event| {
            let label = Label::for_event(registry, event);
            CommitmentLeaf {
                label: label.to_string(),
                tx_hash: *event.tx_hash(),
                leaf: leaf_hash(&label, event.tx_hash()),
            }
        })
        .collect();

    MerkleCommitment::from_entries(entries)
}
