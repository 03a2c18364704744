//! JSON-RPC 2.0 transport
//!
//! Thin request/response layer over `reqwest`. Only the four methods the
//! stack needs are exposed; each one validates the node's payload into a
//! typed value before returning. Transport failures surface as
//! `ChainError::Upstream`, node-side errors as `ChainError::Rpc`.

use crate::error::{ChainError, ChainResult};
use crate::types::{BlockRange, RawLog, RawReceipt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use solcert_primitives::{Address, Hash256};
use tracing::debug;

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u32,
    method: &'a str,
    params: Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    message: String,
}

/// Parse a 0x-hex JSON-RPC quantity into a `u64`
pub fn parse_quantity(quantity: &str) -> ChainResult<u64> {
    let hex_body = quantity.strip_prefix("0x").ok_or_else(|| {
        ChainError::Payload(format!("quantity {quantity:?} lacks 0x prefix"))
    })?;
    u64::from_str_radix(hex_body, 16)
        .map_err(|e| ChainError::Payload(format!("bad quantity {quantity:?}: {e}")))
}

/// Raw JSON-RPC client for a single node endpoint
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    /// Create a client against a node URL
    pub fn new(url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.trim_end_matches('/').to_string(),
        }
    }

    /// The node endpoint this client talks to
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call(&self, method: &str, params: Value) -> ChainResult<Value> {
        debug!(method, url = %self.url, "rpc call");
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChainError::Rpc {
                code: status.as_u16() as i64,
                message: body,
            });
        }

        let body: RpcResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(ChainError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        body.result
            .ok_or_else(|| ChainError::Payload("response carries neither result nor error".into()))
    }

    /// `eth_blockNumber`: the node's current head height
    pub async fn block_number(&self) -> ChainResult<u64> {
        let result = self.call("eth_blockNumber", json!([])).await?;
        let quantity: String = serde_json::from_value(result)?;
        parse_quantity(&quantity)
    }

    /// `eth_getLogs` filtered by contract address and a single topic-0
    pub async fn get_logs(
        &self,
        address: &Address,
        topic0: &Hash256,
        range: &BlockRange,
    ) -> ChainResult<Vec<RawLog>> {
        range.validate()?;
        let filter = json!([{
            "address": address.to_hex_prefixed(),
            "topics": [topic0.to_hex_prefixed()],
            "fromBlock": format!("{:#x}", range.from),
            "toBlock": range.to.to_param(),
        }]);
        let result = self.call("eth_getLogs", filter).await?;
        let logs: Vec<RawLog> = serde_json::from_value(result)?;
        debug!(count = logs.len(), %range, "logs fetched");
        Ok(logs)
    }

    /// `eth_call` against a contract at the latest block
    pub async fn eth_call(&self, to: &Address, data: Vec<u8>) -> ChainResult<Vec<u8>> {
        let params = json!([
            {
                "to": to.to_hex_prefixed(),
                "data": format!("0x{}", hex::encode(data)),
            },
            "latest",
        ]);
        let result = self.call("eth_call", params).await?;
        let payload: String = serde_json::from_value(result)?;
        crate::abi::decode_hex_blob(&payload, "eth_call return").map_err(ChainError::from)
    }

    /// `eth_getTransactionReceipt`; `None` for an unknown transaction
    pub async fn transaction_receipt(
        &self,
        tx_hash: &Hash256,
    ) -> ChainResult<Option<RawReceipt>> {
        let result = self
            .call(
                "eth_getTransactionReceipt",
                json!([tx_hash.to_hex_prefixed()]),
            )
            .await?;
        if result.is_null() {
            return Ok(None);
        }
        let receipt: RawReceipt = serde_json::from_value(result)?;
        Ok(Some(receipt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("0x0").unwrap(), 0);
        assert_eq!(parse_quantity("0x10").unwrap(), 16);
        assert_eq!(parse_quantity("0xff").unwrap(), 255);
    }

    #[test]
    fn test_parse_quantity_requires_prefix() {
        assert!(matches!(
            parse_quantity("10"),
            Err(ChainError::Payload(_))
        ));
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(parse_quantity("0xzz").is_err());
        assert!(parse_quantity("").is_err());
    }

    #[test]
    fn test_url_is_normalized() {
        let client = RpcClient::new("http://127.0.0.1:8545/");
        assert_eq!(client.url(), "http://127.0.0.1:8545");
    }
}
