//! Certificate lifecycle event records
//!
//! These are the typed forms of the ledger's log entries after boundary
//! validation. They are immutable snapshots: once a log is confirmed on
//! chain, its record here never changes. `log_index` is carried alongside
//! `block_number` because leaf order is defined as ascending
//! `(block_number, log_index)` across both committed event classes.

use crate::address::Address;
use crate::hash::Hash256;
use serde::{Deserialize, Serialize};

/// A `CertificateIssued` log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedEvent {
    /// Certificate identifier assigned by the contract
    pub certificate_id: u64,

    /// Producer account that issued the certificate
    pub issuer: Address,

    /// Transaction the event was emitted in
    pub tx_hash: Hash256,

    /// Block the transaction was confirmed in
    pub block_number: u64,

    /// Position of the log within its block
    pub log_index: u64,
}

/// A `CertificatePurchased` log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasedEvent {
    /// Certificate identifier
    pub certificate_id: u64,

    /// Company account that bought the certificate
    pub buyer: Address,

    /// Transaction the event was emitted in
    pub tx_hash: Hash256,

    /// Block the transaction was confirmed in
    pub block_number: u64,

    /// Position of the log within its block
    pub log_index: u64,
}

/// A `CertificateRetired` log entry
///
/// Retirements are counted in activity statistics but never committed into
/// the Merkle tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetiredEvent {
    /// Certificate identifier
    pub certificate_id: u64,

    /// Account that retired the certificate
    pub owner: Address,

    /// Transaction the event was emitted in
    pub tx_hash: Hash256,

    /// Block the transaction was confirmed in
    pub block_number: u64,

    /// Position of the log within its block
    pub log_index: u64,
}

/// A committed certificate event, merged across both classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CertificateEvent {
    /// Certificate issuance by a producer
    Issued(IssuedEvent),
    /// Certificate purchase by a company
    Purchased(PurchasedEvent),
}

impl CertificateEvent {
    /// Certificate identifier of the underlying event
    pub fn certificate_id(&self) -> u64 {
        match self {
            CertificateEvent::Issued(e) => e.certificate_id,
            CertificateEvent::Purchased(e) => e.certificate_id,
        }
    }

    /// Transaction hash of the underlying event
    pub fn tx_hash(&self) -> &Hash256 {
        match self {
            CertificateEvent::Issued(e) => &e.tx_hash,
            CertificateEvent::Purchased(e) => &e.tx_hash,
        }
    }

    /// The account the event attributes the action to: issuer for
    /// issuances, buyer for purchases
    pub fn actor(&self) -> &Address {
        match self {
            CertificateEvent::Issued(e) => &e.issuer,
            CertificateEvent::Purchased(e) => &e.buyer,
        }
    }

    /// Block the event was confirmed in
    pub fn block_number(&self) -> u64 {
        match self {
            CertificateEvent::Issued(e) => e.block_number,
            CertificateEvent::Purchased(e) => e.block_number,
        }
    }

    /// Position of the log within its block
    pub fn log_index(&self) -> u64 {
        match self {
            CertificateEvent::Issued(e) => e.log_index,
            CertificateEvent::Purchased(e) => e.log_index,
        }
    }

    /// Discovery-order key: ascending block number, then log index
    pub fn order_key(&self) -> (u64, u64) {
        (self.block_number(), self.log_index())
    }
}
