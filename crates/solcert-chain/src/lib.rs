//! Solcert Chain
//!
//! Read-only JSON-RPC client for the certificate ledger. This crate is the
//! only place the stack touches the network:
//! - `RpcClient` speaks raw JSON-RPC 2.0 to the node
//! - `ChainClient` layers the contract surface on top: registry snapshots,
//!   the two committed event classes, retirement counts, receipt lookups
//! - `CertificateLedger` is the trait seam the commitment integration and
//!   the test fixtures share
//! - `commit` joins the four independent upstream reads and hands the
//!   result to the pure builder
//!
//! No retries happen here; a failed read fails the whole request and the
//! caller owns retry and timeout policy.

pub mod abi;
pub mod client;
pub mod commit;
pub mod config;
pub mod error;
pub mod rpc;
pub mod source;
pub mod types;

pub use client::ChainClient;
pub use commit::{activity_stats, build_commitment_for_range};
pub use config::ChainConfig;
pub use error::{ChainError, ChainResult};
pub use rpc::RpcClient;
pub use source::CertificateLedger;
pub use types::{ActivityStats, BlockRange, BlockTag, PurchaseRecord};
