//! Simple Feature NFT contract handle
//!
//! The ABI is declared once with `sol!`; calldata is encoded and return data
//! decoded by the generated call types. [`NftContract`] binds the contract
//! address to a transport and, once a wallet is connected, to the signing
//! account (`from`).

use alloy_primitives::{Address, Bytes, B256, U256, U64};
use alloy_sol_types::{decode_revert_reason, sol, Revert, SolCall, SolError};
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::core::error::{AppError, WalletError};
use crate::services::rpc::{get_balance, RpcTransport, REVERT_PREFIX};
use crate::utils::constants::RECEIPT_POLL_INTERVAL_MS;

sol! {
    interface ISimpleFeatureNft {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function tokenId() external view returns (uint256);
        function max_supply() external view returns (uint256);
        function mintprice() external view returns (uint256);
        function remintprice() external view returns (uint256);
        function owner() external view returns (address);
        function ownerOf(uint256 tokenId) external view returns (address);
        function balanceOf(address owner) external view returns (uint256);
        function tokenURI(uint256 tokenId) external view returns (string);

        function mint(address recipient) external payable;
        function mintByOwner(address recipient) external;
        function remint(uint256 tokenId) external payable;
        function remintByOwner(uint256 tokenId) external;
        function getSVG(uint256 tokenId) external view returns (string);
        function getFeatureString(uint256 tokenId) external view returns (string);
        function onlyfeature(uint256) external view returns (uint8, uint8, uint8, uint8, uint8);

        function whitelist(address) external view returns (bool);
        function iswhitelisted(address) external view returns (bool);
        function add_whitelist(address[] calldata addresses) external;
        function remove_whitelist(address[] calldata addresses) external;

        function withdraw() external;
        function getAvailableCombinations() external view returns (uint256);
        function usedCombinations() external view returns (uint256);

        event NFTMinted(address indexed to, uint256 indexed tokenId);
        event NFTReminted(uint256 indexed tokenId);
        event WhitelistUpdated(address indexed user, bool status);
    }
}

pub use ISimpleFeatureNft::*;

/// Five feature codes: background, face, eye, mouth, hair.
pub type FeatureCodes = [u8; 5];

/// The subset of a transaction receipt the UI cares about.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    pub transaction_hash: B256,
    #[serde(default)]
    pub status: Option<U64>,
}

impl TxReceipt {
    /// Pre-Byzantium receipts have no status; treat them as success.
    pub fn succeeded(&self) -> bool {
        self.status.map_or(true, |status| !status.is_zero())
    }
}

#[derive(Clone, Debug)]
pub struct NftContract<T> {
    address: Address,
    signer: Option<Address>,
    transport: T,
}

impl<T: RpcTransport> NftContract<T> {
    /// Read-only handle.
    pub fn new(address: Address, transport: T) -> Self {
        Self {
            address,
            signer: None,
            transport,
        }
    }

    /// Handle bound to a signing account; required for mutating calls.
    pub fn with_signer(mut self, signer: Address) -> Self {
        self.signer = Some(signer);
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn signer(&self) -> Option<Address> {
        self.signer
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    pub async fn name(&self) -> Result<String, AppError> {
        self.call(nameCall {}).await
    }

    pub async fn symbol(&self) -> Result<String, AppError> {
        self.call(symbolCall {}).await
    }

    /// Number of tokens minted so far.
    pub async fn token_id(&self) -> Result<U256, AppError> {
        self.call(tokenIdCall {}).await
    }

    pub async fn max_supply(&self) -> Result<U256, AppError> {
        self.call(max_supplyCall {}).await
    }

    pub async fn mint_price(&self) -> Result<U256, AppError> {
        self.call(mintpriceCall {}).await
    }

    pub async fn remint_price(&self) -> Result<U256, AppError> {
        self.call(remintpriceCall {}).await
    }

    pub async fn owner(&self) -> Result<Address, AppError> {
        self.call(ownerCall {}).await
    }

    pub async fn owner_of(&self, token_id: U256) -> Result<Address, AppError> {
        self.call(ownerOfCall { tokenId: token_id }).await
    }

    pub async fn svg(&self, token_id: U256) -> Result<String, AppError> {
        self.call(getSVGCall { tokenId: token_id }).await
    }

    pub async fn features(&self, token_id: U256) -> Result<FeatureCodes, AppError> {
        let codes = self.call(onlyfeatureCall(token_id)).await?;
        Ok([codes._0, codes._1, codes._2, codes._3, codes._4])
    }

    pub async fn is_whitelisted(&self, account: Address) -> Result<bool, AppError> {
        self.call(iswhitelistedCall(account)).await
    }

    pub async fn available_combinations(&self) -> Result<U256, AppError> {
        self.call(getAvailableCombinationsCall {}).await
    }

    pub async fn used_combinations(&self) -> Result<U256, AppError> {
        self.call(usedCombinationsCall {}).await
    }

    /// Ether held by the contract, in wei.
    pub async fn contract_balance(&self) -> Result<U256, AppError> {
        get_balance(&self.transport, self.address).await
    }

    // ------------------------------------------------------------------
    // Writes (return the transaction hash; see `wait_for_receipt`)
    // ------------------------------------------------------------------

    pub async fn mint(&self, recipient: Address, value: U256) -> Result<B256, AppError> {
        self.send(mintCall { recipient }, value).await
    }

    pub async fn mint_by_owner(&self, recipient: Address) -> Result<B256, AppError> {
        self.send(mintByOwnerCall { recipient }, U256::ZERO).await
    }

    pub async fn remint(&self, token_id: U256, value: U256) -> Result<B256, AppError> {
        self.send(remintCall { tokenId: token_id }, value).await
    }

    pub async fn remint_by_owner(&self, token_id: U256) -> Result<B256, AppError> {
        self.send(remintByOwnerCall { tokenId: token_id }, U256::ZERO).await
    }

    pub async fn add_whitelist(&self, addresses: Vec<Address>) -> Result<B256, AppError> {
        self.send(add_whitelistCall { addresses }, U256::ZERO).await
    }

    pub async fn remove_whitelist(&self, addresses: Vec<Address>) -> Result<B256, AppError> {
        self.send(remove_whitelistCall { addresses }, U256::ZERO).await
    }

    pub async fn withdraw(&self) -> Result<B256, AppError> {
        self.send(withdrawCall {}, U256::ZERO).await
    }

    /// Block until the transaction is mined. There is no timeout: the wait
    /// ends when the provider returns a receipt or an error.
    pub async fn wait_for_receipt(&self, tx_hash: B256) -> Result<TxReceipt, AppError> {
        loop {
            let raw = self
                .transport
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await
                .map_err(revert_to_app_error)?;

            if raw.is_null() {
                TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
                continue;
            }

            let receipt: TxReceipt =
                serde_json::from_value(raw).map_err(|e| AppError::Decode(e.to_string()))?;

            if !receipt.succeeded() {
                return Err(AppError::Contract("transaction execution reverted".to_string()));
            }
            return Ok(receipt);
        }
    }

    // ------------------------------------------------------------------
    // Plumbing
    // ------------------------------------------------------------------

    fn transaction(&self, data: Vec<u8>) -> Map<String, Value> {
        let mut tx = Map::new();
        if let Some(from) = self.signer {
            tx.insert("from".to_string(), json!(from));
        }
        tx.insert("to".to_string(), json!(self.address));
        tx.insert("data".to_string(), json!(Bytes::from(data)));
        tx
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, AppError> {
        let tx = self.transaction(call.abi_encode());

        let raw = self
            .transport
            .request("eth_call", json!([tx, "latest"]))
            .await
            .map_err(revert_to_app_error)?;

        let output: Bytes =
            serde_json::from_value(raw).map_err(|e| AppError::Decode(e.to_string()))?;

        if output.is_empty() {
            return Err(AppError::Decode(format!(
                "{} returned no data; is {} the right contract?",
                C::SIGNATURE,
                self.address
            )));
        }

        C::abi_decode_returns(&output).map_err(|e| AppError::Decode(e.to_string()))
    }

    async fn send<C: SolCall>(&self, call: C, value: U256) -> Result<B256, AppError> {
        if self.signer.is_none() {
            return Err(AppError::Validation("Please connect your wallet first".to_string()));
        }

        let mut tx = self.transaction(call.abi_encode());
        if !value.is_zero() {
            tx.insert("value".to_string(), json!(value));
        }

        log::info!("[CONTRACT] Sending {} (value: {} wei)", C::SIGNATURE, value);

        let raw = self
            .transport
            .request("eth_sendTransaction", json!([tx]))
            .await
            .map_err(revert_to_app_error)?;

        serde_json::from_value(raw).map_err(|e| AppError::Decode(e.to_string()))
    }
}

/// Lift a contract revert out of a provider error so the contract's own
/// reason is what the user sees.
pub fn revert_to_app_error(error: WalletError) -> AppError {
    if let WalletError::Rpc { data, message, .. } = &error {
        let reason = data
            .as_deref()
            .and_then(|hex| hex.parse::<Bytes>().ok())
            .and_then(|bytes| {
                Revert::abi_decode(&bytes)
                    .map(|revert| revert.reason)
                    .ok()
                    .or_else(|| decode_revert_reason(&bytes))
            });
        if let Some(reason) = reason {
            return AppError::Contract(reason);
        }

        let reason = data
            .iter()
            .chain(std::iter::once(message))
            .find_map(|text| text.split_once(REVERT_PREFIX));
        if let Some((_, reason)) = reason {
            return AppError::Contract(reason.trim().to_string());
        }
    }

    AppError::Wallet(error)
}
