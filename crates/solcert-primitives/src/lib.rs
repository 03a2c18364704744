//! Solcert Primitives
//!
//! This crate provides the fundamental building blocks for solar certificate
//! commitments:
//! - Keccak-256 hashing and the `Hash256` newtype
//! - Account addresses with strict boundary validation
//! - Certificate lifecycle event records

pub mod address;
pub mod event;
pub mod hash;

pub use address::{Address, AddressError};
pub use event::{CertificateEvent, IssuedEvent, PurchasedEvent, RetiredEvent};
pub use hash::{keccak256, Hash256};
