//! Runtime configuration
//!
//! The contract address and public endpoint are compile-time constants.
//! A page can point at another deployment with `?contract=0x...&rpc=https://...`;
//! overrides live only as long as the tab.

use alloy_primitives::Address;

use crate::utils::constants::{
    CONTRACT_ADDRESS, CONTRACT_QUERY_PARAM, PUBLIC_RPC_URL, RPC_QUERY_PARAM,
};
use crate::utils::url::get_query_param;
use crate::utils::validation::parse_address;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub contract_address: Address,
    pub rpc_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract_address: CONTRACT_ADDRESS,
            rpc_url: PUBLIC_RPC_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever the current page URL overrides.
    pub fn load() -> Self {
        Self::from_overrides(
            get_query_param(CONTRACT_QUERY_PARAM),
            get_query_param(RPC_QUERY_PARAM),
        )
    }

    pub fn from_overrides(contract: Option<String>, rpc: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = contract {
            match parse_address(&raw) {
                Some(address) => config.contract_address = address,
                None => log::warn!("[CONFIG] Ignoring invalid contract override: {}", raw),
            }
        }

        if let Some(url) = rpc {
            if url.starts_with("http://") || url.starts_with("https://") {
                config.rpc_url = url;
            } else {
                log::warn!("[CONFIG] Ignoring non-HTTP rpc override: {}", url);
            }
        }

        config
    }

    /// A zero address means no deployment has been configured.
    pub fn is_contract_configured(&self) -> bool {
        !self.contract_address.is_zero()
    }
}
