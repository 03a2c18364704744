//! Solcert Merkle - Verifiable commitments over certificate ledger events
//!
//! This crate ties the stack together: it reads `CertificateIssued` and
//! `CertificatePurchased` logs from a ledger node, resolves actor addresses
//! to registry slot labels, encodes deterministic Keccak-256 leaves and
//! builds a sorted-pair Merkle tree with per-leaf inclusion proofs.
//!
//! # Crates
//!
//! - `solcert-primitives`: hashes, addresses, event records
//! - `solcert-commitment`: labels, leaf encoding, tree construction
//! - `solcert-chain`: JSON-RPC ledger client and fetch-and-build integration
//! - `solcert-verifier`: stateless inclusion-proof verification
//!
//! # Example
//!
//! ```no_run
//! use solcert_chain::{build_commitment_for_range, BlockRange, ChainClient, ChainConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ChainClient::new(&ChainConfig::from_env())?;
//!     let commitment = build_commitment_for_range(&client, &BlockRange::default()).await?;
//!     if let Some(root) = commitment.root() {
//!         println!("root: {root}");
//!     }
//!     Ok(())
//! }
//! ```

// Re-export sub-crates
pub use solcert_chain as chain;
pub use solcert_commitment as commitment;
pub use solcert_primitives as primitives;
pub use solcert_verifier as verifier;
