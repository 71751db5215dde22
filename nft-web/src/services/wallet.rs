//! Injected Wallet Integration via wasm-bindgen
//!
//! JavaScript interop for the EIP-1193 provider that MetaMask and compatible
//! wallets inject as `window.ethereum`. Everything above this module talks
//! JSON (`serde_json::Value`); the conversion to and from `JsValue` happens here.

use alloy_primitives::Address;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::error::WalletError;
use crate::services::rpc::revert_data_from;

// ============================================================================
// EIP-1193 PROVIDER BINDINGS (JavaScript Interop)
// ============================================================================

#[wasm_bindgen(inline_js = "
export function hasEthereum() {
    return typeof window.ethereum !== 'undefined' && window.ethereum !== null;
}

export async function ethereumRequest(method, params) {
    if (!hasEthereum()) {
        throw { code: -32000, message: 'No Ethereum provider' };
    }
    return await window.ethereum.request({ method: method, params: params });
}

export function onEthereumEvent(name, callback) {
    if (!hasEthereum() || typeof window.ethereum.on !== 'function') {
        return false;
    }
    window.ethereum.on(name, callback);
    return true;
}
")]
extern "C" {
    /// Whether a provider has been injected into the page
    fn hasEthereum() -> bool;

    /// `window.ethereum.request({ method, params })`
    #[wasm_bindgen(catch)]
    async fn ethereumRequest(method: &str, params: JsValue) -> Result<JsValue, JsValue>;

    /// `window.ethereum.on(name, callback)`; false when the provider has no event API
    fn onEthereumEvent(name: &str, callback: &Function) -> bool;
}

// ============================================================================
// WALLET SERVICE
// ============================================================================

/// Check if an injected wallet is available
pub fn is_available() -> bool {
    hasEthereum()
}

/// Send a JSON-RPC request through the injected provider.
pub async fn request(method: &str, params: Value) -> Result<Value, WalletError> {
    if !is_available() {
        return Err(WalletError::NotInstalled);
    }

    // json_compatible turns maps into plain JS objects instead of `Map`s
    let js_params = params
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| WalletError::Serialization(e.to_string()))?;

    match ethereumRequest(method, js_params).await {
        Ok(result) => {
            if result.is_undefined() || result.is_null() {
                return Ok(Value::Null);
            }
            serde_wasm_bindgen::from_value(result)
                .map_err(|e| WalletError::Serialization(e.to_string()))
        }
        Err(e) => Err(wallet_error_from_js(&e)),
    }
}

/// Ask the wallet for account access (shows the wallet popup) and return the
/// active account.
pub async fn request_accounts() -> Result<Address, WalletError> {
    let accounts = request("eth_requestAccounts", Value::Array(vec![])).await?;
    let accounts: Vec<Address> = serde_json::from_value(accounts)
        .map_err(|e| WalletError::Serialization(e.to_string()))?;

    accounts.into_iter().next().ok_or(WalletError::NoAccount)
}

/// Register a callback for when the wallet's account list changes.
///
/// An empty list means the wallet disconnected this site.
/// The closure is leaked: the listener lives as long as the page.
pub fn on_accounts_changed(callback: impl Fn(Vec<Address>) + 'static) -> Result<(), WalletError> {
    let closure = Closure::wrap(Box::new(move |accounts: JsValue| {
        let accounts = Array::from(&accounts)
            .iter()
            .filter_map(|account| account.as_string())
            .filter_map(|account| account.parse::<Address>().ok())
            .collect();
        callback(accounts);
    }) as Box<dyn Fn(JsValue)>);

    if !onEthereumEvent("accountsChanged", closure.as_ref().unchecked_ref()) {
        return Err(WalletError::NotInstalled);
    }

    closure.forget();
    Ok(())
}

/// Register a callback for when the wallet switches chains.
pub fn on_chain_changed(callback: impl Fn() + 'static) -> Result<(), WalletError> {
    let closure = Closure::wrap(Box::new(move |_chain_id: JsValue| {
        callback();
    }) as Box<dyn Fn(JsValue)>);

    if !onEthereumEvent("chainChanged", closure.as_ref().unchecked_ref()) {
        return Err(WalletError::NotInstalled);
    }

    closure.forget();
    Ok(())
}

/// Reload the page; flushes every piece of derived UI state.
pub fn reload_page() {
    let reloaded = web_sys::window().map(|window| window.location().reload());
    if !matches!(reloaded, Some(Ok(()))) {
        log::error!("[SESSION] Page reload failed");
    }
}

/// Convert a thrown provider error (`{ code, message, data }`) into a [`WalletError`].
fn wallet_error_from_js(error: &JsValue) -> WalletError {
    if let Some(text) = error.as_string() {
        return WalletError::Rpc { code: 0, message: text, data: None };
    }

    let code = Reflect::get(error, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_f64())
        .map(|code| code as i64)
        .unwrap_or_default();

    let message = Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error));

    let data = Reflect::get(error, &JsValue::from_str("data"))
        .ok()
        .filter(|data| !data.is_undefined() && !data.is_null())
        .and_then(|data| serde_wasm_bindgen::from_value::<Value>(data).ok())
        .and_then(|data| revert_data_from(&data));

    WalletError::from_rpc(code, message, data)
}
