//! Solcert Verifier
//!
//! Stateless verification of inclusion proofs produced by the commitment
//! builder. The verifier needs only the root, the leaf and the ordered
//! sibling sequence — under sorted-pair hashing no left/right position
//! information is required.
//!
//! # Usage
//!
//! ```ignore
//! use solcert_verifier::verify_inclusion_hex;
//!
//! let check = verify_inclusion_hex(root_hex, leaf_hex, &proof_hex)?;
//! assert!(check.valid);
//! ```

mod error;
mod verify;

pub use error::VerifierError;
pub use verify::{verify_inclusion, verify_inclusion_hex, InclusionCheck};
