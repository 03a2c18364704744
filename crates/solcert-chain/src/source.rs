//! The ledger-source trait seam
//!
//! `CertificateLedger` abstracts the four snapshot reads a commitment build
//! needs. `ChainClient` is the production implementation; tests substitute
//! an in-memory fixture so the build pipeline can be exercised without a
//! node.

use crate::error::ChainResult;
use crate::types::BlockRange;
use async_trait::async_trait;
use solcert_primitives::{Address, IssuedEvent, PurchasedEvent};

/// Read access to the certificate ledger's registries and event history
///
/// All four reads are independent snapshots with no ordering dependency;
/// callers may issue them concurrently.
#[async_trait]
pub trait CertificateLedger: Send + Sync {
    /// The producer allow-list, in registration order
    async fn producers(&self) -> ChainResult<Vec<Address>>;

    /// The company allow-list, in registration order
    async fn companies(&self) -> ChainResult<Vec<Address>>;

    /// All `CertificateIssued` events in an inclusive block range,
    /// ascending by `(blockNumber, logIndex)`
    async fn issued_events(&self, range: &BlockRange) -> ChainResult<Vec<IssuedEvent>>;

    /// All `CertificatePurchased` events in an inclusive block range,
    /// ascending by `(blockNumber, logIndex)`
    async fn purchased_events(&self, range: &BlockRange) -> ChainResult<Vec<PurchasedEvent>>;
}
