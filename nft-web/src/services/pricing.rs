//! Funding amounts for payable calls
//!
//! Whitelisted accounts pay half. The halving is integer division on wei, the
//! same truncation the contract applies, so the two sides never disagree by a
//! rounding step.

use alloy_primitives::{Address, U256};

use crate::core::error::AppError;
use crate::services::contract::NftContract;
use crate::services::rpc::RpcTransport;

/// Which base price a payable call is funded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceKind {
    Mint,
    Remint,
}

/// Whitelist status of an account and the price it pays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectivePrice {
    pub whitelisted: bool,
    pub price: U256,
}

/// Amount to attach to `mint`/`remint` for the given base price.
pub fn funding_amount(base_price: U256, whitelisted: bool) -> U256 {
    if whitelisted {
        base_price / U256::from(2u64)
    } else {
        base_price
    }
}

/// Read the account's whitelist flag and the base price together and apply
/// the discount.
pub async fn effective_price<T: RpcTransport>(
    contract: &NftContract<T>,
    account: Address,
    kind: PriceKind,
) -> Result<EffectivePrice, AppError> {
    let base = async {
        match kind {
            PriceKind::Mint => contract.mint_price().await,
            PriceKind::Remint => contract.remint_price().await,
        }
    };
    let (whitelisted, base) = futures::try_join!(contract.is_whitelisted(account), base)?;

    Ok(EffectivePrice {
        whitelisted,
        price: funding_amount(base, whitelisted),
    })
}
