//! In-memory chain used by the unit tests.
//!
//! Implements [`RpcTransport`] by decoding calldata against the contract ABI
//! and keeping just enough state (supply, prices, whitelist, token owners and
//! features) to behave like the deployed contract. Every request is recorded
//! so tests can assert that nothing reached the network.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use alloy_primitives::{address, Address, Bytes, B256, U256};
use alloy_sol_types::{Revert, SolError, SolInterface, SolValue};
use serde_json::{json, Value};

use crate::core::error::WalletError;
use crate::services::contract::{FeatureCodes, ISimpleFeatureNftCalls, NftContract};
use crate::services::rpc::RpcTransport;

const MILLI_ETHER: u64 = 1_000_000_000_000_000;
const TOTAL_COMBINATIONS: u64 = 90;

struct ChainState {
    requests: Vec<(String, Value)>,
    deployed: bool,
    failed_receipts: bool,
    next_send_error: Option<WalletError>,
    mint_price: U256,
    remint_price: U256,
    max_supply: U256,
    token_id: U256,
    whitelist: HashSet<Address>,
    tokens: HashMap<U256, (Address, FeatureCodes)>,
    balances: HashMap<Address, U256>,
    contract_balance: U256,
    tx_counter: u8,
}

#[derive(Clone)]
pub struct MockChain {
    state: Rc<RefCell<ChainState>>,
}

impl MockChain {
    pub const CONTRACT: Address = address!("62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5");
    pub const OWNER: Address = address!("00000000000000000000000000000000000000ff");
    pub const USER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa1");
    pub const OTHER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb2");

    pub fn new() -> Self {
        let state = ChainState {
            requests: Vec::new(),
            deployed: true,
            failed_receipts: false,
            next_send_error: None,
            mint_price: U256::from(MILLI_ETHER),
            remint_price: U256::from(MILLI_ETHER / 2),
            max_supply: U256::from(100u64),
            token_id: U256::ZERO,
            whitelist: HashSet::new(),
            tokens: HashMap::new(),
            balances: HashMap::from([(Self::USER, U256::from(2 * MILLI_ETHER * 1000))]),
            contract_balance: U256::ZERO,
            tx_counter: 0,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    // ------------------------------------------------------------------
    // Builders
    // ------------------------------------------------------------------

    /// Every `eth_call` returns empty data, like calling an address with no code.
    pub fn without_contract(self) -> Self {
        self.state.borrow_mut().deployed = false;
        self
    }

    pub fn with_failed_receipts(self) -> Self {
        self.state.borrow_mut().failed_receipts = true;
        self
    }

    pub fn with_mint_price(self, price: U256) -> Self {
        self.state.borrow_mut().mint_price = price;
        self
    }

    pub fn with_remint_price(self, price: U256) -> Self {
        self.state.borrow_mut().remint_price = price;
        self
    }

    pub fn with_whitelisted(self, account: Address) -> Self {
        self.state.borrow_mut().whitelist.insert(account);
        self
    }

    pub fn with_token(self, token_id: u64, owner: Address, features: FeatureCodes) -> Self {
        {
            let mut state = self.state.borrow_mut();
            let id = U256::from(token_id);
            state.tokens.insert(id, (owner, features));
            if id > state.token_id {
                state.token_id = id;
            }
        }
        self
    }

    pub fn with_contract_balance(self, balance: U256) -> Self {
        self.state.borrow_mut().contract_balance = balance;
        self
    }

    /// Make the next `eth_sendTransaction` fail with `error`.
    pub fn fail_next_send(&self, error: WalletError) {
        self.state.borrow_mut().next_send_error = Some(error);
    }

    // ------------------------------------------------------------------
    // Handles and inspection
    // ------------------------------------------------------------------

    pub fn read_only_contract(&self) -> NftContract<MockChain> {
        NftContract::new(Self::CONTRACT, self.clone())
    }

    pub fn contract_for(&self, signer: Address) -> NftContract<MockChain> {
        NftContract::new(Self::CONTRACT, self.clone()).with_signer(signer)
    }

    pub fn mint_price(&self) -> U256 {
        self.state.borrow().mint_price
    }

    pub fn is_whitelisted(&self, account: Address) -> bool {
        self.state.borrow().whitelist.contains(&account)
    }

    pub fn total_minted(&self) -> U256 {
        self.state.borrow().token_id
    }

    pub fn token_owner(&self, token_id: u64) -> Option<Address> {
        self.state.borrow().tokens.get(&U256::from(token_id)).map(|(owner, _)| *owner)
    }

    /// Number of requests of any kind that reached the transport.
    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    pub fn methods(&self) -> Vec<String> {
        self.state.borrow().requests.iter().map(|(method, _)| method.clone()).collect()
    }

    /// Transaction objects passed to `eth_sendTransaction`, in order.
    pub fn sent_transactions(&self) -> Vec<Value> {
        self.state
            .borrow()
            .requests
            .iter()
            .filter(|(method, _)| method == "eth_sendTransaction")
            .map(|(_, params)| params[0].clone())
            .collect()
    }

    /// `value` of the last sent transaction (zero when omitted).
    pub fn last_sent_value(&self) -> Option<U256> {
        self.sent_transactions().last().map(|tx| {
            tx.get("value")
                .cloned()
                .map(|value| serde_json::from_value(value).expect("value is a quantity"))
                .unwrap_or(U256::ZERO)
        })
    }

    // ------------------------------------------------------------------
    // Request handling
    // ------------------------------------------------------------------

    fn handle(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.state
            .borrow_mut()
            .requests
            .push((method.to_string(), params.clone()));

        match method {
            "eth_call" => self.eth_call(&params[0]),
            "eth_sendTransaction" => self.eth_send_transaction(&params[0]),
            "eth_getTransactionReceipt" => {
                let status = if self.state.borrow().failed_receipts { "0x0" } else { "0x1" };
                Ok(json!({ "transactionHash": params[0], "status": status }))
            }
            "eth_getBalance" => {
                let account: Address =
                    serde_json::from_value(params[0].clone()).map_err(serialization)?;
                let state = self.state.borrow();
                let balance = if account == Self::CONTRACT {
                    state.contract_balance
                } else {
                    state.balances.get(&account).copied().unwrap_or_default()
                };
                Ok(json!(balance))
            }
            other => Err(WalletError::Rpc {
                code: -32601,
                message: format!("method {} not found", other),
                data: None,
            }),
        }
    }

    fn eth_call(&self, tx: &Value) -> Result<Value, WalletError> {
        if !self.state.borrow().deployed {
            return Ok(json!("0x"));
        }

        let data: Bytes = serde_json::from_value(tx["data"].clone()).map_err(serialization)?;
        let call = ISimpleFeatureNftCalls::abi_decode(&data).map_err(|_| revert("unknown selector"))?;
        let state = self.state.borrow();

        let encoded = match call {
            ISimpleFeatureNftCalls::name(_) => "Simple Feature".to_string().abi_encode(),
            ISimpleFeatureNftCalls::symbol(_) => "SFNFT".to_string().abi_encode(),
            ISimpleFeatureNftCalls::tokenId(_) => state.token_id.abi_encode(),
            ISimpleFeatureNftCalls::max_supply(_) => state.max_supply.abi_encode(),
            ISimpleFeatureNftCalls::mintprice(_) => state.mint_price.abi_encode(),
            ISimpleFeatureNftCalls::remintprice(_) => state.remint_price.abi_encode(),
            ISimpleFeatureNftCalls::owner(_) => Self::OWNER.abi_encode(),
            ISimpleFeatureNftCalls::ownerOf(call) => {
                let (owner, _) = state
                    .tokens
                    .get(&call.tokenId)
                    .ok_or_else(|| revert("ERC721: invalid token ID"))?;
                owner.abi_encode()
            }
            ISimpleFeatureNftCalls::getSVG(call) => {
                if !state.tokens.contains_key(&call.tokenId) {
                    return Err(revert("ERC721: invalid token ID"));
                }
                format!("<svg xmlns=\"http://www.w3.org/2000/svg\"><text>{}</text></svg>", call.tokenId)
                    .abi_encode()
            }
            ISimpleFeatureNftCalls::onlyfeature(call) => {
                let (_, f) = state
                    .tokens
                    .get(&call.0)
                    .ok_or_else(|| revert("ERC721: invalid token ID"))?;
                let [a, b, c, d, e] = (*f).map(U256::from);
                (a, b, c, d, e).abi_encode()
            }
            ISimpleFeatureNftCalls::iswhitelisted(call) => state.whitelist.contains(&call.0).abi_encode(),
            ISimpleFeatureNftCalls::whitelist(call) => state.whitelist.contains(&call.0).abi_encode(),
            ISimpleFeatureNftCalls::usedCombinations(_) => state.token_id.abi_encode(),
            ISimpleFeatureNftCalls::getAvailableCombinations(_) => {
                U256::from(TOTAL_COMBINATIONS).saturating_sub(state.token_id).abi_encode()
            }
            _ => return Err(revert("not a view function")),
        };

        Ok(json!(Bytes::from(encoded)))
    }

    fn eth_send_transaction(&self, tx: &Value) -> Result<Value, WalletError> {
        if let Some(error) = self.state.borrow_mut().next_send_error.take() {
            return Err(error);
        }

        let from: Address = serde_json::from_value(tx["from"].clone()).map_err(serialization)?;
        let data: Bytes = serde_json::from_value(tx["data"].clone()).map_err(serialization)?;
        let value: U256 = match tx.get("value") {
            Some(value) => serde_json::from_value(value.clone()).map_err(serialization)?,
            None => U256::ZERO,
        };
        let call = ISimpleFeatureNftCalls::abi_decode(&data).map_err(|_| revert("unknown selector"))?;

        let mut state = self.state.borrow_mut();
        let discounted = |price: U256, whitelisted: bool| {
            if whitelisted {
                price / U256::from(2u64)
            } else {
                price
            }
        };

        match call {
            ISimpleFeatureNftCalls::mint(call) => {
                let price = discounted(state.mint_price, state.whitelist.contains(&from));
                if value < price {
                    return Err(revert("Insufficient payment"));
                }
                state.token_id += U256::from(1u64);
                let id = state.token_id;
                state.tokens.insert(id, (call.recipient, [0, 0, 0, 0, 0]));
                state.contract_balance += value;
            }
            ISimpleFeatureNftCalls::mintByOwner(call) => {
                only_owner(from)?;
                state.token_id += U256::from(1u64);
                let id = state.token_id;
                state.tokens.insert(id, (call.recipient, [0, 0, 0, 0, 0]));
            }
            ISimpleFeatureNftCalls::remint(call) => {
                let price = discounted(state.remint_price, state.whitelist.contains(&from));
                if value < price {
                    return Err(revert("Insufficient payment"));
                }
                reroll(&mut state.tokens, call.tokenId)?;
                state.contract_balance += value;
            }
            ISimpleFeatureNftCalls::remintByOwner(call) => {
                only_owner(from)?;
                reroll(&mut state.tokens, call.tokenId)?;
            }
            ISimpleFeatureNftCalls::add_whitelist(call) => {
                only_owner(from)?;
                state.whitelist.extend(call.addresses);
            }
            ISimpleFeatureNftCalls::remove_whitelist(call) => {
                only_owner(from)?;
                for account in call.addresses {
                    state.whitelist.remove(&account);
                }
            }
            ISimpleFeatureNftCalls::withdraw(_) => {
                only_owner(from)?;
                let amount = std::mem::take(&mut state.contract_balance);
                *state.balances.entry(Self::OWNER).or_default() += amount;
            }
            _ => return Err(revert("not a mutating function")),
        }

        state.tx_counter += 1;
        Ok(json!(B256::with_last_byte(state.tx_counter)))
    }
}

impl RpcTransport for MockChain {
    async fn request(&self, method: &str, params: Value) -> Result<Value, WalletError> {
        self.handle(method, params)
    }
}

fn revert(reason: &str) -> WalletError {
    let data = Revert {
        reason: reason.to_string(),
    }
    .abi_encode();
    WalletError::Rpc {
        code: 3,
        message: "execution reverted".to_string(),
        data: Some(Bytes::from(data).to_string()),
    }
}

fn serialization(error: serde_json::Error) -> WalletError {
    WalletError::Serialization(error.to_string())
}

fn only_owner(from: Address) -> Result<(), WalletError> {
    if from == MockChain::OWNER {
        Ok(())
    } else {
        Err(revert("Ownable: caller is not the owner"))
    }
}

fn reroll(tokens: &mut HashMap<U256, (Address, FeatureCodes)>, token_id: U256) -> Result<(), WalletError> {
    let (_, features) = tokens
        .get_mut(&token_id)
        .ok_or_else(|| revert("ERC721: invalid token ID"))?;
    features.rotate_left(1);
    Ok(())
}
