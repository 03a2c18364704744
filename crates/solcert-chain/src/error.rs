//! Error types for the ledger client

use solcert_primitives::AddressError;
use thiserror::Error;

/// Errors that can occur while reading from the ledger
#[derive(Debug, Error)]
pub enum ChainError {
    /// Block range rejected before any network call
    #[error("invalid block range: fromBlock {from} is past toBlock {to}")]
    InvalidRange { from: u64, to: u64 },

    /// Node unreachable or transport-level failure
    #[error("upstream node unavailable: {0}")]
    Upstream(#[from] reqwest::Error),

    /// The node answered with a JSON-RPC error object
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The node's payload did not match the expected shape
    #[error("malformed rpc payload: {0}")]
    Payload(String),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed account address at a parse boundary
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Log or call return data failed ABI decoding
    #[error("abi decode failed: {0}")]
    Abi(#[from] crate::abi::AbiError),

    /// Receipt lookup for an unknown transaction
    #[error("transaction {0} not found")]
    TransactionNotFound(String),

    /// A receipt contained no certificate purchase event
    #[error("no certificate purchase event in transaction {0}")]
    NoPurchaseInTransaction(String),
}

/// Result type for ledger reads
pub type ChainResult<T> = Result<T, ChainError>;
