//! # Error Types
//!
//! Two layers, both derived with `thiserror`:
//!
//! - [`WalletError`]: failures at the provider boundary (injected wallet or the
//!   public JSON-RPC endpoint). Wallet rejections keep the wallet's own text.
//! - [`AppError`]: what an action or a read reports to the user. Contract
//!   reverts are lifted out of [`WalletError::Rpc`] into [`AppError::Contract`]
//!   so the contract-supplied reason is what gets displayed.
//!
//! Every variant renders to the exact text shown after the action prefix, e.g.
//! `"Mint failed: " + err.to_string()`.

use thiserror::Error;

/// EIP-1193 error code for "user rejected the request".
pub const USER_REJECTED_CODE: i64 = 4001;

/// Provider boundary errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WalletError {
    /// No injected `window.ethereum` provider.
    #[error("No Ethereum wallet detected. Please install MetaMask")]
    NotInstalled,

    /// The wallet answered `eth_requestAccounts` with an empty list.
    #[error("The wallet did not return any account")]
    NoAccount,

    /// The user declined the account or transaction prompt.
    #[error("{0}")]
    Rejected(String),

    /// JSON-RPC error object returned by the provider.
    #[error("{message}")]
    Rpc {
        code: i64,
        message: String,
        /// Revert data the node attached: hex return data, or the nested
        /// `execution reverted: ...` message when the wallet kept only that.
        data: Option<String>,
    },

    /// HTTP or fetch level failure talking to the public endpoint.
    #[error("Network request failed: {0}")]
    Transport(String),

    /// A response could not be converted to or from JSON.
    #[error("Unexpected provider response: {0}")]
    Serialization(String),
}

impl WalletError {
    /// Classify a JSON-RPC error object the way wallets report them.
    pub fn from_rpc(code: i64, message: String, data: Option<String>) -> Self {
        if code == USER_REJECTED_CODE {
            WalletError::Rejected(message)
        } else {
            WalletError::Rpc { code, message, data }
        }
    }
}

/// Errors surfaced to the user by reads and actions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Local input validation failed; nothing was sent.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// The contract reverted; holds its reason string.
    #[error("{0}")]
    Contract(String),

    /// The call returned data that does not match the ABI (or no data at all,
    /// which is what a missing contract looks like).
    #[error("Unexpected contract response: {0}")]
    Decode(String),
}

impl AppError {
    /// True when the failure looks like a missing or misconfigured contract
    /// rather than a transport problem.
    pub fn is_call_exception(&self) -> bool {
        matches!(self, AppError::Contract(_) | AppError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_is_classified() {
        let err = WalletError::from_rpc(
            4001,
            "MetaMask Tx Signature: User denied transaction signature.".to_string(),
            None,
        );
        assert_eq!(
            err,
            WalletError::Rejected("MetaMask Tx Signature: User denied transaction signature.".to_string())
        );
        assert_eq!(
            AppError::from(err).to_string(),
            "MetaMask Tx Signature: User denied transaction signature."
        );
    }

    #[test]
    fn test_call_exception_detection() {
        assert!(AppError::Decode("empty return data".into()).is_call_exception());
        assert!(AppError::Contract("Not owner".into()).is_call_exception());
        assert!(!AppError::Wallet(WalletError::Transport("offline".into())).is_call_exception());
        assert!(!AppError::Validation("bad".into()).is_call_exception());
    }
}
