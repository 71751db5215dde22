//! Application constants

use alloy_primitives::{address, Address};

/// Deployed Simple Feature NFT contract (Sepolia).
pub const CONTRACT_ADDRESS: Address = address!("62aA5e91C4187Cd419520f9Be5De1a5e7eDEe2C5");

/// Public read-only endpoint used for stats before a wallet is connected.
pub const PUBLIC_RPC_URL: &str = "https://rpc.sepolia.org";

pub const METAMASK_DOWNLOAD_URL: &str = "https://metamask.io/download.html";

/// Display name prefix for tokens in the viewer.
pub const TOKEN_TITLE_PREFIX: &str = "Simple Feature";

// Query parameters that override the defaults above for the life of the tab
pub const CONTRACT_QUERY_PARAM: &str = "contract";
pub const RPC_QUERY_PARAM: &str = "rpc";

// Placeholders shown when the stats cannot be read
pub const PLACEHOLDER_MAX_SUPPLY: &str = "100";
pub const PLACEHOLDER_MINT_PRICE: &str = "0.001";

// UI timings
pub const NOTICE_LIFETIME_MS: u32 = 5_000;
pub const REMINT_RELOAD_DELAY_MS: u32 = 1_000;
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 1_500;
