//! Mint / remint / owner action executor
//!
//! Every button that sends a transaction goes through [`execute`]:
//!
//! 1. guard: connected, and owner for owner-only actions
//! 2. validate the panel input locally (no request leaves the tab on failure)
//! 3. compute funding from fresh whitelist and price reads, then submit
//! 4. wait for the receipt and settle with a message plus follow-up refreshes
//!
//! Phase changes are reported through the `observe` callback so the caller
//! can drive the button label and the "submitted" notice.

use alloy_primitives::{Address, B256, U256};

use crate::core::error::AppError;
use crate::services::contract::NftContract;
use crate::services::pricing::{effective_price, PriceKind};
use crate::services::rpc::RpcTransport;
use crate::state::notices::{NoticeKind, Region};
use crate::state::session::Session;
use crate::utils::constants::REMINT_RELOAD_DELAY_MS;
use crate::utils::validation::{parse_address, parse_token_id};

pub const SUBMITTED_MESSAGE: &str = "Transaction submitted, waiting for confirmation...";

const CONNECT_FIRST: &str = "Please connect your wallet first";
const INVALID_RECIPIENT: &str = "Please enter a valid recipient address";
const INVALID_ADDRESS: &str = "Please enter a valid address";
const INVALID_TOKEN_ID: &str = "Please enter a valid token ID";
const LOAD_FIRST: &str = "Please load an NFT first";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Mint,
    Remint,
    OwnerMint,
    OwnerRemint,
    AddToWhitelist,
    RemoveFromWhitelist,
    Withdraw,
}

impl ActionKind {
    /// Prefix for failure messages: "{title} failed: {reason}".
    pub fn title(self) -> &'static str {
        match self {
            ActionKind::Mint => "Mint",
            ActionKind::Remint => "Remint",
            ActionKind::OwnerMint => "Owner mint",
            ActionKind::OwnerRemint => "Owner remint",
            ActionKind::AddToWhitelist => "Add to whitelist",
            ActionKind::RemoveFromWhitelist => "Remove from whitelist",
            ActionKind::Withdraw => "Withdraw",
        }
    }

    pub fn resting_label(self) -> &'static str {
        match self {
            ActionKind::Mint => "Mint NFT",
            ActionKind::Remint => "Remint",
            ActionKind::OwnerMint => "Owner Mint",
            ActionKind::OwnerRemint => "Free Remint",
            ActionKind::AddToWhitelist => "Add",
            ActionKind::RemoveFromWhitelist => "Remove",
            ActionKind::Withdraw => "Withdraw Funds",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            ActionKind::Mint | ActionKind::OwnerMint => "Minting...",
            ActionKind::Remint | ActionKind::OwnerRemint => "Reminting...",
            ActionKind::AddToWhitelist => "Adding...",
            ActionKind::RemoveFromWhitelist => "Removing...",
            ActionKind::Withdraw => "Withdrawing...",
        }
    }

    /// Message region the action reports into.
    pub fn region(self) -> Region {
        match self {
            ActionKind::Mint => Region::Mint,
            ActionKind::Remint => Region::Viewer,
            _ => Region::Admin,
        }
    }

    pub fn requires_owner(self) -> bool {
        !matches!(self, ActionKind::Mint | ActionKind::Remint)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionPhase {
    Submitting,
    AwaitingConfirmation(B256),
    Settled,
}

/// Refreshes the UI runs after a successful action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowUp {
    RefreshStats,
    RefreshBalance,
    RefreshWhitelist,
    RefreshContractBalance,
    ReloadToken { token_id: U256, delay_ms: u32 },
    ClearInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Guard not met; nothing shown, nothing sent.
    Skipped,
    /// Rejected before any request.
    Invalid(String),
    Succeeded {
        message: String,
        follow_ups: Vec<FollowUp>,
    },
    Failed(String),
}

impl ActionOutcome {
    /// The line to show in the action's region, if any.
    pub fn notice(&self) -> Option<(NoticeKind, &str)> {
        match self {
            ActionOutcome::Skipped => None,
            ActionOutcome::Invalid(message) | ActionOutcome::Failed(message) => {
                Some((NoticeKind::Error, message))
            }
            ActionOutcome::Succeeded { message, .. } => Some((NoticeKind::Success, message)),
        }
    }

    pub fn follow_ups(&self) -> &[FollowUp] {
        match self {
            ActionOutcome::Succeeded { follow_ups, .. } => follow_ups,
            _ => &[],
        }
    }
}

/// A validated request, ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Request {
    Mint(Address),
    Remint(U256),
    OwnerMint(Address),
    OwnerRemint(U256),
    AddToWhitelist(Address),
    RemoveFromWhitelist(Address),
    Withdraw,
}

fn validate(kind: ActionKind, input: &str) -> Result<Request, String> {
    let address = |message: &str| parse_address(input).ok_or_else(|| message.to_string());
    let token_id = || parse_token_id(input).ok_or_else(|| INVALID_TOKEN_ID.to_string());

    match kind {
        ActionKind::Mint => address(INVALID_RECIPIENT).map(Request::Mint),
        ActionKind::OwnerMint => address(INVALID_RECIPIENT).map(Request::OwnerMint),
        ActionKind::Remint => {
            if input.trim().is_empty() {
                return Err(LOAD_FIRST.to_string());
            }
            token_id().map(Request::Remint)
        }
        ActionKind::OwnerRemint => token_id().map(Request::OwnerRemint),
        ActionKind::AddToWhitelist => address(INVALID_ADDRESS).map(Request::AddToWhitelist),
        ActionKind::RemoveFromWhitelist => {
            address(INVALID_ADDRESS).map(Request::RemoveFromWhitelist)
        }
        ActionKind::Withdraw => Ok(Request::Withdraw),
    }
}

/// Run one action end to end.
///
/// `contract` is the signer-bound handle, `None` when no wallet is connected.
/// `input` is the panel's text field (recipient, token id or address; ignored
/// by withdraw).
pub async fn execute<T: RpcTransport>(
    contract: Option<&NftContract<T>>,
    session: &Session,
    kind: ActionKind,
    input: &str,
    mut observe: impl FnMut(ActionPhase),
) -> ActionOutcome {
    let Some(contract) = contract else {
        return match kind {
            ActionKind::Mint => ActionOutcome::Invalid(CONNECT_FIRST.to_string()),
            _ => ActionOutcome::Skipped,
        };
    };
    if kind.requires_owner() && !session.is_owner {
        return ActionOutcome::Skipped;
    }

    let request = match validate(kind, input) {
        Ok(request) => request,
        Err(message) => return ActionOutcome::Invalid(message),
    };

    observe(ActionPhase::Submitting);
    log::info!("[ACTION] {} submitting", kind.title());

    let result = run(contract, session, &request, &mut observe).await;
    observe(ActionPhase::Settled);

    match result {
        Ok(message) => {
            log::info!("[ACTION] {} settled: {}", kind.title(), message);
            ActionOutcome::Succeeded {
                message,
                follow_ups: follow_ups(&request),
            }
        }
        Err(err) => {
            log::error!("[ACTION] {} failed: {}", kind.title(), err);
            ActionOutcome::Failed(format!("{} failed: {}", kind.title(), err))
        }
    }
}

async fn run<T: RpcTransport>(
    contract: &NftContract<T>,
    session: &Session,
    request: &Request,
    observe: &mut impl FnMut(ActionPhase),
) -> Result<String, AppError> {
    let tx_hash = match request {
        Request::Mint(recipient) => {
            let value = funding(contract, PriceKind::Mint).await?;
            contract.mint(*recipient, value).await?
        }
        // The contract owner remints for free from the viewer as well
        Request::Remint(token_id) if session.is_owner => contract.remint_by_owner(*token_id).await?,
        Request::Remint(token_id) => {
            let value = funding(contract, PriceKind::Remint).await?;
            contract.remint(*token_id, value).await?
        }
        Request::OwnerMint(recipient) => contract.mint_by_owner(*recipient).await?,
        Request::OwnerRemint(token_id) => contract.remint_by_owner(*token_id).await?,
        Request::AddToWhitelist(account) => contract.add_whitelist(vec![*account]).await?,
        Request::RemoveFromWhitelist(account) => contract.remove_whitelist(vec![*account]).await?,
        Request::Withdraw => contract.withdraw().await?,
    };

    observe(ActionPhase::AwaitingConfirmation(tx_hash));
    log::info!("[ACTION] Waiting for {}", tx_hash);
    contract.wait_for_receipt(tx_hash).await?;

    let message = match request {
        Request::Mint(_) => format!("NFT minted! Token ID: {}", contract.token_id().await?),
        Request::OwnerMint(_) => format!("Owner mint succeeded! Token ID: {}", contract.token_id().await?),
        Request::Remint(_) => "Remint succeeded!".to_string(),
        Request::OwnerRemint(_) => "Owner remint succeeded!".to_string(),
        Request::AddToWhitelist(_) => "Added to whitelist!".to_string(),
        Request::RemoveFromWhitelist(_) => "Removed from whitelist!".to_string(),
        Request::Withdraw => "Funds withdrawn!".to_string(),
    };
    Ok(message)
}

async fn funding<T: RpcTransport>(contract: &NftContract<T>, kind: PriceKind) -> Result<U256, AppError> {
    let signer = contract
        .signer()
        .ok_or_else(|| AppError::Validation(CONNECT_FIRST.to_string()))?;
    Ok(effective_price(contract, signer, kind).await?.price)
}

fn follow_ups(request: &Request) -> Vec<FollowUp> {
    match request {
        Request::Mint(_) => vec![FollowUp::RefreshStats, FollowUp::RefreshBalance],
        Request::OwnerMint(_) => vec![FollowUp::RefreshStats],
        Request::Remint(token_id) => vec![
            FollowUp::RefreshBalance,
            FollowUp::ReloadToken {
                token_id: *token_id,
                delay_ms: REMINT_RELOAD_DELAY_MS,
            },
        ],
        Request::OwnerRemint(_) => vec![FollowUp::ClearInput],
        Request::AddToWhitelist(_) | Request::RemoveFromWhitelist(_) => {
            vec![FollowUp::ClearInput, FollowUp::RefreshWhitelist]
        }
        Request::Withdraw => vec![FollowUp::RefreshContractBalance, FollowUp::RefreshBalance],
    }
}
