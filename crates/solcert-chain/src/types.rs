//! Wire types and block-range handling
//!
//! Raw JSON-RPC payloads are loosely typed (quantities as 0x-hex strings,
//! optional fields); everything is validated into explicit types here, at
//! the boundary, before the rest of the stack sees it.

use crate::error::{ChainError, ChainResult};
use serde::{Deserialize, Serialize};
use solcert_primitives::{Address, Hash256};

/// Upper bound of a block range: a concrete height or the node's head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockTag {
    /// A concrete block height
    Number(u64),
    /// The node's latest block
    #[default]
    Latest,
}

impl BlockTag {
    /// Render as a JSON-RPC block parameter (`"latest"` or 0x-hex quantity)
    pub fn to_param(self) -> String {
        match self {
            BlockTag::Number(n) => format!("{n:#x}"),
            BlockTag::Latest => "latest".to_string(),
        }
    }
}

impl std::fmt::Display for BlockTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BlockTag::Number(n) => write!(f, "{n}"),
            BlockTag::Latest => f.write_str("latest"),
        }
    }
}

impl std::str::FromStr for BlockTag {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("latest") {
            return Ok(BlockTag::Latest);
        }
        if let Some(hex) = s.strip_prefix("0x") {
            return u64::from_str_radix(hex, 16).map(BlockTag::Number);
        }
        s.parse::<u64>().map(BlockTag::Number)
    }
}

/// An inclusive block range for event queries, defaulting to `(0, latest)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRange {
    /// First block of the range
    pub from: u64,
    /// Last block of the range
    pub to: BlockTag,
}

impl Default for BlockRange {
    fn default() -> Self {
        Self {
            from: 0,
            to: BlockTag::Latest,
        }
    }
}

impl BlockRange {
    /// Create a validated range
    pub fn new(from: u64, to: BlockTag) -> ChainResult<Self> {
        let range = Self { from, to };
        range.validate()?;
        Ok(range)
    }

    /// Reject an inverted numeric range; `latest` always validates
    ///
    /// Runs before any network call so a bad range never reaches the node.
    pub fn validate(&self) -> ChainResult<()> {
        if let BlockTag::Number(to) = self.to {
            if self.from > to {
                return Err(ChainError::InvalidRange {
                    from: self.from,
                    to,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for BlockRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.from, self.to)
    }
}

/// A raw log entry as returned by `eth_getLogs`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLog {
    /// Emitting contract address
    pub address: String,

    /// Topic list; topic 0 is the event signature hash
    pub topics: Vec<String>,

    /// Non-indexed argument words, 0x-hex
    pub data: String,

    /// Block height, 0x-hex quantity
    pub block_number: String,

    /// Transaction hash
    pub transaction_hash: String,

    /// Log position within the block, 0x-hex quantity
    pub log_index: String,
}

/// The subset of a transaction receipt this crate consumes
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawReceipt {
    /// Transaction hash
    pub transaction_hash: String,

    /// Block height, 0x-hex quantity
    pub block_number: String,

    /// Logs emitted by the transaction
    pub logs: Vec<RawLog>,
}

/// A decoded `CertificatePurchased` event found in a transaction receipt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    /// Certificate identifier
    pub certificate_id: u64,

    /// Account the certificate moved from
    pub seller: Address,

    /// Account the certificate moved to
    pub buyer: Address,

    /// Sale price in wei
    pub price_wei: u128,

    /// Transaction the purchase settled in
    pub tx_hash: Hash256,
}

/// Event activity over a recent block window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityStats {
    /// Head block at the time of the query
    pub current_block: u64,

    /// Number of blocks covered by the window
    pub blocks_analyzed: u64,

    /// `CertificateIssued` events in the window
    pub issued: usize,

    /// `CertificatePurchased` events in the window
    pub purchased: usize,

    /// `CertificateRetired` events in the window
    pub retired: usize,
}
