//! `eth_call` / `eth_getBalance` over reqwest.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use alloy_primitives::{Address, Bytes, U256};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::trace;

use crate::config::ChainConfig;
use crate::domain::{Amount, ReservePair, TokenAddress};
use crate::error::{Result, SwapError};
use crate::router::{
    decode_allowance, decode_balance_of, decode_get_pair, decode_get_reserves, encode_allowance,
    encode_balance_of, encode_get_pair, encode_get_reserves,
};
use crate::traits::ChainReader;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

impl<T> RpcResponse<T> {
    fn into_result(self, method: &str) -> Result<T> {
        if let Some(err) = self.error {
            return Err(SwapError::NetworkError(format!(
                "{method} failed ({}): {}",
                err.code, err.message
            )));
        }
        self.result
            .ok_or_else(|| SwapError::NetworkError(format!("{method} returned no result")))
    }
}

/// Reads pair, allowance and balance state from a JSON-RPC node.
///
/// Pair lookups go through the factory's `getPair`; a zero answer means
/// the pair does not exist.  Reading reserves of an address without code
/// yields [`SwapError::NoLiquidity`].
#[derive(Debug)]
pub struct JsonRpcChainReader {
    http: reqwest::Client,
    url: String,
    factory: Address,
    next_id: AtomicU64,
}

impl JsonRpcChainReader {
    /// Creates a reader for the node at `url` and the pair factory
    /// `factory`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the HTTP client cannot
    /// be built.
    pub fn new(url: impl Into<String>, factory: Address) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| SwapError::InvalidConfiguration(format!("http client: {e}")))?;
        Ok(Self {
            http,
            url: url.into(),
            factory,
            next_id: AtomicU64::new(1),
        })
    }

    /// Creates a reader from a network's configuration.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new); the configuration is validated first.
    pub fn from_chain_config(chain: &ChainConfig) -> Result<Self> {
        chain.validate()?;
        Self::new(chain.rpc_url.clone(), chain.factory)
    }

    /// Node endpoint.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request<T: DeserializeOwned>(&self, method: &str, params: serde_json::Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };
        trace!(id, method, "rpc request");
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| SwapError::NetworkError(format!("{method}: {e}")))?;
        let parsed: RpcResponse<T> = response
            .json()
            .await
            .map_err(|e| SwapError::NetworkError(format!("{method}: malformed response: {e}")))?;
        parsed.into_result(method)
    }

    async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes> {
        self.request("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await
    }
}

/// Decodes `getReserves()` return data, treating empty data as a missing
/// pair.
fn reserves_from_call_data(data: &[u8]) -> Result<ReservePair> {
    if data.is_empty() {
        return Err(SwapError::NoLiquidity);
    }
    decode_get_reserves(data)
}

/// Maps the factory's zero answer to `None`.
fn pair_from_call_data(data: &[u8]) -> Result<Option<Address>> {
    let pair = decode_get_pair(data)?;
    Ok((pair != Address::ZERO).then_some(pair))
}

#[async_trait]
impl ChainReader for JsonRpcChainReader {
    async fn get_pair_address(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
    ) -> Result<Option<Address>> {
        let data = self.eth_call(self.factory, encode_get_pair(token_a, token_b)).await?;
        pair_from_call_data(&data)
    }

    async fn get_reserves(&self, pair: Address) -> Result<ReservePair> {
        let data = self.eth_call(pair, encode_get_reserves()).await?;
        reserves_from_call_data(&data)
    }

    async fn get_allowance(
        &self,
        token: TokenAddress,
        owner: Address,
        spender: Address,
    ) -> Result<Amount> {
        let data = self
            .eth_call(token.address(), encode_allowance(owner, spender))
            .await?;
        decode_allowance(&data)
    }

    async fn get_balance(&self, owner: Address, token: TokenAddress) -> Result<Amount> {
        if token.is_native() {
            let wei: U256 = self.request("eth_getBalance", json!([owner, "latest"])).await?;
            return Ok(Amount::from_u256(wei));
        }
        let data = self.eth_call(token.address(), encode_balance_of(owner)).await?;
        decode_balance_of(&data)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use alloy_sol_types::SolValue;

    use super::*;

    #[test]
    fn request_is_json_rpc_2() {
        let body = RpcRequest {
            jsonrpc: "2.0",
            id: 7,
            method: "eth_getBalance",
            params: json!([Address::repeat_byte(0x11), "latest"]),
        };
        let Ok(value) = serde_json::to_value(&body) else {
            panic!("serializable");
        };
        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 7);
        assert_eq!(value["params"][0], "0x1111111111111111111111111111111111111111");
    }

    #[test]
    fn error_response_is_network_error() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32000,"message":"execution reverted"}}"#;
        let Ok(resp) = serde_json::from_str::<RpcResponse<Bytes>>(raw) else {
            panic!("parses");
        };
        let Err(SwapError::NetworkError(msg)) = resp.into_result("eth_call") else {
            panic!("expected NetworkError");
        };
        assert!(msg.contains("execution reverted"));
    }

    #[test]
    fn balance_quantity_parses_as_u256() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"result":"0xde0b6b3a7640000"}"#;
        let Ok(resp) = serde_json::from_str::<RpcResponse<U256>>(raw) else {
            panic!("parses");
        };
        assert_eq!(resp.into_result("eth_getBalance"), Ok(U256::from(10u64.pow(18))));
    }

    #[test]
    fn missing_result_is_network_error() {
        let raw = r#"{"jsonrpc":"2.0","id":1,"result":null}"#;
        let Ok(resp) = serde_json::from_str::<RpcResponse<Bytes>>(raw) else {
            panic!("parses");
        };
        assert!(matches!(resp.into_result("eth_call"), Err(SwapError::NetworkError(_))));
    }

    #[test]
    fn empty_reserves_data_means_no_pair() {
        assert_eq!(reserves_from_call_data(&[]), Err(SwapError::NoLiquidity));
    }

    #[test]
    fn reserves_decode_from_call_data() {
        let data = (U256::from(1_000u64), U256::from(2_000u64), U256::from(9u64)).abi_encode();
        let Ok(r) = reserves_from_call_data(&data) else {
            panic!("valid encoding");
        };
        assert_eq!(r.reserve0(), Amount::new(1_000));
        assert_eq!(r.reserve1(), Amount::new(2_000));
        assert_eq!(r.block_timestamp_last(), 9);
    }

    #[test]
    fn zero_pair_means_none() {
        let zero = Address::ZERO.abi_encode();
        assert_eq!(pair_from_call_data(&zero), Ok(None));
        let pair = Address::repeat_byte(0xb4).abi_encode();
        assert_eq!(pair_from_call_data(&pair), Ok(Some(Address::repeat_byte(0xb4))));
    }

    #[test]
    fn reader_from_preset() {
        let Ok(reader) = JsonRpcChainReader::from_chain_config(&ChainConfig::sepolia()) else {
            panic!("preset is valid");
        };
        assert!(reader.url().starts_with("https://"));
    }
}
