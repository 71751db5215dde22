//! JSON-RPC transports
//!
//! [`RpcTransport`] is the seam between contract logic and the outside world.
//! Two implementations exist:
//!
//! - [`WalletTransport`]: the injected wallet; can sign and send transactions.
//! - [`HttpTransport`]: a public read-only endpoint, used for stats before a
//!   wallet is connected.

use alloy_primitives::{Address, U256};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::core::error::{AppError, WalletError};
use crate::services::wallet;

/// Prefix nodes put in front of a contract's revert reason.
pub const REVERT_PREFIX: &str = "execution reverted: ";

/// Something that answers Ethereum JSON-RPC requests.
#[allow(async_fn_in_trait)]
pub trait RpcTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError>;
}

/// The injected wallet provider (`window.ethereum`).
#[derive(Clone, Copy, Debug, Default)]
pub struct WalletTransport;

impl RpcTransport for WalletTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        wallet::request(method, params).await
    }
}

/// Plain HTTP JSON-RPC endpoint.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    url: String,
}

impl HttpTransport {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[derive(Serialize)]
struct JsonRpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcErrorObject>,
}

#[derive(Deserialize)]
struct JsonRpcErrorObject {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<Value>,
}

impl RpcTransport for HttpTransport {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        let body = JsonRpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = Request::post(&self.url)
            .json(&body)
            .map_err(|e| WalletError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| WalletError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(WalletError::Transport(format!(
                "{} returned HTTP {}",
                self.url,
                response.status()
            )));
        }

        let envelope: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| WalletError::Serialization(e.to_string()))?;

        if let Some(error) = envelope.error {
            let data = error.data.as_ref().and_then(revert_data_from);
            return Err(WalletError::from_rpc(error.code, error.message, data));
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

/// Pull revert data out of a JSON-RPC error `data` field.
///
/// Nodes put hex return data there directly (`"0x08c379a0..."`); some wallets
/// nest it one level deeper (`{ "data": "0x..." }` or
/// `{ "originalError": { "data": ... } }`). MetaMask may instead wrap the node
/// error with only its text (`{ "code": 3, "message": "execution reverted: ..." }`),
/// in which case that message is returned.
pub fn revert_data_from(data: &Value) -> Option<String> {
    match data {
        Value::String(hex) if hex.starts_with("0x") => Some(hex.clone()),
        Value::Object(fields) => fields
            .get("data")
            .and_then(revert_data_from)
            .or_else(|| fields.get("originalError").and_then(revert_data_from))
            .or_else(|| {
                fields
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|message| message.contains(REVERT_PREFIX))
                    .map(str::to_string)
            }),
        _ => None,
    }
}

/// Native balance of an account, in wei.
pub async fn get_balance<T: RpcTransport>(transport: &T, address: Address) -> Result<U256, AppError> {
    let raw = transport
        .request("eth_getBalance", json!([address, "latest"]))
        .await?;

    serde_json::from_value(raw).map_err(|e| AppError::Decode(e.to_string()))
}
