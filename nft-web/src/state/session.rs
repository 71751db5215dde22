//! Session model
//!
//! One [`Session`] per tab. All changes go through [`reduce`], a pure
//! function of the current session and an incoming event that returns the
//! next session plus the side effects to run. The wallet context applies the
//! effects; tests drive `reduce` directly.

use alloy_primitives::Address;

use crate::services::contract::NftContract;
use crate::services::rpc::RpcTransport;
use crate::state::notices::NoticeKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Active account; `Some` exactly when connected.
    pub address: Option<Address>,
    /// Connected account is the contract owner.
    pub is_owner: bool,
}

impl Session {
    pub fn connected(&self) -> bool {
        self.address.is_some()
    }

    /// Contract handle bound to this session's signer, if connected.
    pub fn contract<T: RpcTransport>(&self, contract: Address, transport: T) -> Option<NftContract<T>> {
        self.address
            .map(|signer| NftContract::new(contract, transport).with_signer(signer))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Connect button pressed.
    ConnectRequested,
    /// The wallet granted access to `address`.
    Connected(Address),
    ConnectFailed(String),
    /// The contract reported its owner.
    OwnerResolved(Address),
    /// Wallet pushed a new account list.
    AccountsChanged(Vec<Address>),
    /// Wallet switched networks.
    ChainChanged,
    /// Disconnect button pressed.
    DisconnectRequested,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    RequestAccounts,
    Reload,
    RefreshBalance,
    CheckOwner,
    RefreshWhitelist,
    RefreshContractBalance,
    Notify(NoticeKind, String),
}

pub fn reduce(session: &Session, event: SessionEvent) -> (Session, Vec<SessionEffect>) {
    match event {
        SessionEvent::ConnectRequested => (session.clone(), vec![SessionEffect::RequestAccounts]),

        SessionEvent::Connected(address) => (
            Session {
                address: Some(address),
                is_owner: false,
            },
            vec![
                SessionEffect::RefreshBalance,
                SessionEffect::CheckOwner,
                SessionEffect::RefreshWhitelist,
                SessionEffect::Notify(NoticeKind::Success, "Wallet connected!".to_string()),
            ],
        ),

        SessionEvent::ConnectFailed(reason) => (
            Session::default(),
            vec![SessionEffect::Notify(
                NoticeKind::Error,
                format!("Failed to connect wallet: {}", reason),
            )],
        ),

        SessionEvent::OwnerResolved(owner) => {
            // Stale answer for an account that is no longer connected
            let Some(address) = session.address else {
                return (session.clone(), vec![]);
            };

            // Address equality is on bytes, so checksum casing never matters
            let is_owner = address == owner;
            let effects = if is_owner {
                vec![SessionEffect::RefreshContractBalance]
            } else {
                vec![]
            };
            (
                Session {
                    address: Some(address),
                    is_owner,
                },
                effects,
            )
        }

        SessionEvent::AccountsChanged(accounts) => {
            if accounts.is_empty() {
                (Session::default(), vec![SessionEffect::Reload])
            } else {
                (session.clone(), vec![SessionEffect::RequestAccounts])
            }
        }

        SessionEvent::ChainChanged => (session.clone(), vec![SessionEffect::Reload]),

        SessionEvent::DisconnectRequested => (Session::default(), vec![SessionEffect::Reload]),
    }
}
