//! Contract-level ledger client
//!
//! `ChainClient` layers the pinned certificate contract surface over the raw
//! RPC transport: registry getters, the three event classes, and receipt
//! lookups. Every payload is decoded against the pinned ABI exactly; there
//! is no fallback extraction path.

use crate::abi;
use crate::config::ChainConfig;
use crate::error::{ChainError, ChainResult};
use crate::rpc::{parse_quantity, RpcClient};
use crate::source::CertificateLedger;
use crate::types::{BlockRange, PurchaseRecord, RawLog};
use async_trait::async_trait;
use solcert_primitives::{Address, Hash256, IssuedEvent, PurchasedEvent, RetiredEvent};
use tracing::debug;

/// Word counts of the pinned event payloads
const ISSUED_WORDS: usize = 5;
const PURCHASED_WORDS: usize = 4;
const RETIRED_WORDS: usize = 2;

/// Read-only client for the certificate contract
#[derive(Debug, Clone)]
pub struct ChainClient {
    rpc: RpcClient,
    contract: Address,
}

impl ChainClient {
    /// Create a client from connection settings
    ///
    /// Fails with `InvalidAddress` if the configured contract address is
    /// malformed; nothing is validated against the network here.
    pub fn new(config: &ChainConfig) -> ChainResult<Self> {
        let contract = Address::from_hex(&config.contract_address)?;
        Ok(Self {
            rpc: RpcClient::new(&config.rpc_url),
            contract,
        })
    }

    /// The contract address this client reads
    pub fn contract(&self) -> &Address {
        &self.contract
    }

    /// The node's current head height
    pub async fn latest_block(&self) -> ChainResult<u64> {
        self.rpc.block_number().await
    }

    async fn registry_call(&self, signature: &str) -> ChainResult<Vec<Address>> {
        let data = self.rpc.eth_call(&self.contract, abi::call_data(signature)).await?;
        let addresses = abi::decode_address_array(&data)?;
        debug!(signature, count = addresses.len(), "registry snapshot");
        Ok(addresses)
    }

    async fn event_logs(&self, signature: &str, range: &BlockRange) -> ChainResult<Vec<RawLog>> {
        range.validate()?;
        let topic = abi::event_topic(signature);
        let mut logs = self.rpc.get_logs(&self.contract, &topic, range).await?;
        // getLogs output order is not part of the node contract; leaf order
        // is (blockNumber, logIndex) ascending
        logs.sort_by_key(|log| {
            (
                parse_quantity(&log.block_number).unwrap_or(u64::MAX),
                parse_quantity(&log.log_index).unwrap_or(u64::MAX),
            )
        });
        Ok(logs)
    }

    /// `CertificateRetired` events in a range; counted for activity stats,
    /// never committed
    pub async fn retired_events(&self, range: &BlockRange) -> ChainResult<Vec<RetiredEvent>> {
        let logs = self.event_logs(abi::RETIRED_EVENT_SIG, range).await?;
        logs.iter().map(decode_retired_log).collect()
    }

    /// Look up the purchase settled by a transaction
    ///
    /// Fetches the receipt and scans its logs for a `CertificatePurchased`
    /// event emitted by the configured contract.
    pub async fn purchase_in_transaction(
        &self,
        tx_hash: &Hash256,
    ) -> ChainResult<PurchaseRecord> {
        let receipt = self
            .rpc
            .transaction_receipt(tx_hash)
            .await?
            .ok_or_else(|| ChainError::TransactionNotFound(tx_hash.to_hex_prefixed()))?;

        let topic = abi::event_topic(abi::PURCHASED_EVENT_SIG).to_hex_prefixed();
        for log in &receipt.logs {
            let emitter = Address::from_hex(&log.address)?;
            if emitter != self.contract {
                continue;
            }
            if log.topics.first().map(|t| t.eq_ignore_ascii_case(&topic)) != Some(true) {
                continue;
            }
            return decode_purchase_record(log);
        }
        Err(ChainError::NoPurchaseInTransaction(
            tx_hash.to_hex_prefixed(),
        ))
    }
}

#[async_trait]
impl CertificateLedger for ChainClient {
    async fn producers(&self) -> ChainResult<Vec<Address>> {
        self.registry_call(abi::PRODUCERS_CALL_SIG).await
    }

    async fn companies(&self) -> ChainResult<Vec<Address>> {
        self.registry_call(abi::COMPANIES_CALL_SIG).await
    }

    async fn issued_events(&self, range: &BlockRange) -> ChainResult<Vec<IssuedEvent>> {
        let logs = self.event_logs(abi::ISSUED_EVENT_SIG, range).await?;
        logs.iter().map(decode_issued_log).collect()
    }

    async fn purchased_events(&self, range: &BlockRange) -> ChainResult<Vec<PurchasedEvent>> {
        let logs = self.event_logs(abi::PURCHASED_EVENT_SIG, range).await?;
        logs.iter().map(decode_purchased_log).collect()
    }
}

fn log_position(log: &RawLog) -> ChainResult<(u64, u64, Hash256)> {
    let block_number = parse_quantity(&log.block_number)?;
    let log_index = parse_quantity(&log.log_index)?;
    let tx_hash = Hash256::from_hex(&log.transaction_hash)
        .map_err(|e| ChainError::Payload(format!("bad transaction hash: {e}")))?;
    Ok((block_number, log_index, tx_hash))
}

/// Decode a pinned `CertificateIssued` log
///
/// Data words: `id, owner, energyWh, issuedAt, issuer`; only `id` and
/// `issuer` participate in commitments.
pub fn decode_issued_log(log: &RawLog) -> ChainResult<IssuedEvent> {
    let data = abi::decode_hex_blob(&log.data, "issued event data")?;
    abi::expect_words(&data, ISSUED_WORDS)?;
    let (block_number, log_index, tx_hash) = log_position(log)?;
    Ok(IssuedEvent {
        certificate_id: abi::decode_u64(&data, 0)?,
        issuer: abi::decode_address(&data, 4)?,
        tx_hash,
        block_number,
        log_index,
    })
}

/// Decode a pinned `CertificatePurchased` log
///
/// Data words: `id, from, to, priceWei`; the buyer is `to`.
pub fn decode_purchased_log(log: &RawLog) -> ChainResult<PurchasedEvent> {
    let data = abi::decode_hex_blob(&log.data, "purchased event data")?;
    abi::expect_words(&data, PURCHASED_WORDS)?;
    let (block_number, log_index, tx_hash) = log_position(log)?;
    Ok(PurchasedEvent {
        certificate_id: abi::decode_u64(&data, 0)?,
        buyer: abi::decode_address(&data, 2)?,
        tx_hash,
        block_number,
        log_index,
    })
}

/// Decode a pinned `CertificateRetired` log: `id, owner`
pub fn decode_retired_log(log: &RawLog) -> ChainResult<RetiredEvent> {
    let data = abi::decode_hex_blob(&log.data, "retired event data")?;
    abi::expect_words(&data, RETIRED_WORDS)?;
    let (block_number, log_index, tx_hash) = log_position(log)?;
    Ok(RetiredEvent {
        certificate_id: abi::decode_u64(&data, 0)?,
        owner: abi::decode_address(&data, 1)?,
        tx_hash,
        block_number,
        log_index,
    })
}

/// Decode the full purchase record from a `CertificatePurchased` log
pub fn decode_purchase_record(log: &RawLog) -> ChainResult<PurchaseRecord> {
    let data = abi::decode_hex_blob(&log.data, "purchased event data")?;
    abi::expect_words(&data, PURCHASED_WORDS)?;
    let (_, _, tx_hash) = log_position(log)?;
    Ok(PurchaseRecord {
        certificate_id: abi::decode_u64(&data, 0)?,
        seller: abi::decode_address(&data, 1)?,
        buyer: abi::decode_address(&data, 2)?,
        price_wei: abi::decode_u128(&data, 3)?,
        tx_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_words(words: &[[u8; 32]]) -> String {
        let mut flat = Vec::new();
        for w in words {
            flat.extend_from_slice(w);
        }
        format!("0x{}", hex::encode(flat))
    }

    fn word_u64(value: u64) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[24..].copy_from_slice(&value.to_be_bytes());
        w
    }

    fn word_address(byte: u8) -> [u8; 32] {
        let mut w = [0u8; 32];
        w[12..].fill(byte);
        w
    }

    fn raw_log(data: String, block: u64, index: u64) -> RawLog {
        RawLog {
            address: "0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string(),
            topics: vec![],
            data,
            block_number: format!("{block:#x}"),
            transaction_hash: Hash256::keccak256(b"tx").to_hex_prefixed(),
            log_index: format!("{index:#x}"),
        }
    }

    #[test]
    fn test_decode_issued_log() {
        let data = hex_words(&[
            word_u64(5),          // id
            word_address(0x11),   // owner
            word_u64(1_000),      // energyWh
            word_u64(1_700_000),  // issuedAt
            word_address(0xaa),   // issuer
        ]);
        let event = decode_issued_log(&raw_log(data, 16, 2)).unwrap();
        assert_eq!(event.certificate_id, 5);
        assert_eq!(event.issuer, Address::from_bytes([0xaa; 20]));
        assert_eq!(event.block_number, 16);
        assert_eq!(event.log_index, 2);
    }

    #[test]
    fn test_decode_purchased_log() {
        let data = hex_words(&[
            word_u64(7),          // id
            word_address(0xaa),   // from
            word_address(0xcc),   // to
            word_u64(42),         // priceWei
        ]);
        let event = decode_purchased_log(&raw_log(data, 9, 0)).unwrap();
        assert_eq!(event.certificate_id, 7);
        assert_eq!(event.buyer, Address::from_bytes([0xcc; 20]));
    }

    #[test]
    fn test_decode_purchase_record_keeps_both_sides() {
        let data = hex_words(&[
            word_u64(7),
            word_address(0xaa),
            word_address(0xcc),
            word_u64(1_000_000_000),
        ]);
        let record = decode_purchase_record(&raw_log(data, 9, 0)).unwrap();
        assert_eq!(record.seller, Address::from_bytes([0xaa; 20]));
        assert_eq!(record.buyer, Address::from_bytes([0xcc; 20]));
        assert_eq!(record.price_wei, 1_000_000_000);
    }

    #[test]
    fn test_decode_rejects_wrong_word_count() {
        // issued payload with a missing word
        let data = hex_words(&[word_u64(5), word_address(0x11), word_u64(1_000)]);
        assert!(matches!(
            decode_issued_log(&raw_log(data, 1, 0)),
            Err(ChainError::Abi(_))
        ));
    }

    #[test]
    fn test_decode_rejects_bad_tx_hash() {
        let data = hex_words(&[
            word_u64(5),
            word_address(0x11),
            word_u64(1_000),
            word_u64(1_700_000),
            word_address(0xaa),
        ]);
        let mut log = raw_log(data, 1, 0);
        log.transaction_hash = "0x1234".to_string();
        assert!(matches!(
            decode_issued_log(&log),
            Err(ChainError::Payload(_))
        ));
    }

    #[test]
    fn test_client_rejects_malformed_contract_address() {
        let config = ChainConfig {
            rpc_url: "http://127.0.0.1:8545".to_string(),
            contract_address: "0xnot-an-address".to_string(),
        };
        assert!(matches!(
            ChainClient::new(&config),
            Err(ChainError::InvalidAddress(_))
        ));
    }
}
