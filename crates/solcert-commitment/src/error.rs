//! Error types for commitment construction

use thiserror::Error;

/// Errors that can occur while building or querying a commitment
#[derive(Debug, Error)]
pub enum CommitmentError {
    /// A tree was requested over zero leaves
    ///
    /// Note that an empty *event set* is not an error: `build_commitment`
    /// returns a rootless commitment for it. Only constructing a
    /// `MerkleTree` directly from no leaves is rejected.
    #[error("merkle tree cannot be built over zero leaves")]
    EmptyTree,

    /// A proof was requested for a leaf that is not part of the tree
    #[error("leaf {0} is not part of the current tree")]
    LeafNotFound(String),

    /// A proof was requested for a leaf index past the end of the tree
    #[error("leaf index {index} out of bounds ({len} leaves)")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type for commitment operations
pub type CommitmentResult<T> = Result<T, CommitmentError>;
