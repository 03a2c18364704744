//! Solcert Commitment
//!
//! This crate turns a snapshot of certificate lifecycle events into a
//! verifiable Merkle commitment:
//! - **Registry resolution**: raw account addresses become stable slot
//!   labels (`P<n>` for producers, `C<n>` for companies) based on
//!   registration order in the on-chain allow-lists.
//! - **Leaf encoding**: `(label, txHash)` pairs are serialized into
//!   Keccak-256 leaves with a frozen grammar.
//! - **Tree construction**: a binary Merkle tree with sorted-pair hashing,
//!   exposing the root and per-leaf inclusion proofs.
//!
//! Everything here is pure computation: a commitment is rebuilt from fresh
//! ledger data on every request and no tree state survives a build.

pub mod builder;
pub mod error;
pub mod label;
pub mod leaf;
pub mod registry;
pub mod tree;

pub use builder::{build_commitment, CommitmentLeaf, CommitmentSummary, MerkleCommitment};
pub use error::{CommitmentError, CommitmentResult};
pub use label::Label;
pub use leaf::leaf_hash;
pub use registry::{Party, RegistrySnapshot};
pub use tree::{hash_pair, MerkleTree};
