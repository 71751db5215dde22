//! Collection stats
//!
//! Total minted, max supply and base mint price. Reads go through the signer's
//! handle when a wallet is connected and through the public endpoint
//! otherwise; the caller picks the transport. This loader never fails: on
//! error it returns placeholders plus an optional diagnostic for the mint
//! region.

use shared::units::format_ether;

use crate::services::contract::NftContract;
use crate::services::rpc::RpcTransport;
use crate::utils::constants::{PLACEHOLDER_MAX_SUPPLY, PLACEHOLDER_MINT_PRICE};

pub const MISCONFIGURED_CONTRACT: &str = "Please check the contract address configuration";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsView {
    pub total_minted: String,
    pub max_supply: String,
    /// Base price in ether, without unit.
    pub mint_price: String,
    /// Collection name; blank when it could not be read.
    pub name: String,
    pub symbol: String,
}

impl StatsView {
    fn placeholder(total_minted: &str) -> Self {
        Self {
            total_minted: total_minted.to_string(),
            max_supply: PLACEHOLDER_MAX_SUPPLY.to_string(),
            mint_price: PLACEHOLDER_MINT_PRICE.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsReport {
    pub view: StatsView,
    /// Error line for the mint region, set when the address looks wrong.
    pub diagnostic: Option<String>,
}

/// Load the stats panel.
///
/// `configured` is false for the zero address; no request is made then.
pub async fn load_stats<T: RpcTransport>(contract: &NftContract<T>, configured: bool) -> StatsReport {
    if !configured {
        log::warn!("[STATS] Contract address not configured, showing defaults");
        return StatsReport {
            view: StatsView::placeholder("0"),
            diagnostic: None,
        };
    }

    let counters = async {
        futures::try_join!(contract.token_id(), contract.max_supply(), contract.mint_price())
    };
    let header = async { futures::join!(contract.name(), contract.symbol()) };
    let (counters, (name, symbol)) = futures::join!(counters, header);

    match counters {
        Ok((total_minted, max_supply, mint_price)) => StatsReport {
            view: StatsView {
                total_minted: total_minted.to_string(),
                max_supply: max_supply.to_string(),
                mint_price: format_ether(mint_price),
                name: name.unwrap_or_default(),
                symbol: symbol.unwrap_or_default(),
            },
            diagnostic: None,
        },
        Err(err) => {
            log::error!("[STATS] Failed to load contract stats: {}", err);
            StatsReport {
                view: StatsView::placeholder("?"),
                diagnostic: err
                    .is_call_exception()
                    .then(|| MISCONFIGURED_CONTRACT.to_string()),
            }
        }
    }
}
