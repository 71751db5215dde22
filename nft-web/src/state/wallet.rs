//! Wallet state management
//!
//! [`WalletContext`] is the single coordinator for the tab: it owns the
//! session signal, runs the session reducer and applies its effects, and keeps
//! the wallet-derived displays (balance, whitelist, prices, admin counters and
//! collection stats) up to date.

use alloy_primitives::U256;
use leptos::prelude::*;

use crate::config::AppConfig;
use crate::services::actions::FollowUp;
use crate::services::contract::NftContract;
use crate::services::pricing::{effective_price, PriceKind};
use crate::services::rpc::{get_balance, HttpTransport, WalletTransport};
use crate::services::stats::{load_stats, StatsView};
use crate::services::wallet;
use crate::state::notices::{NoticeBoard, NoticeKind, Region};
use crate::state::session::{reduce, Session, SessionEffect, SessionEvent};

/// Global wallet context
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub session: RwSignal<Session>,
    /// An injected provider was found at start-up.
    pub provider_available: RwSignal<bool>,
    pub balance: RwSignal<Option<U256>>,
    pub whitelisted: RwSignal<Option<bool>>,
    /// Mint price after the whitelist discount.
    pub current_price: RwSignal<Option<U256>>,
    pub contract_balance: RwSignal<Option<U256>>,
    /// `(used, available)` combination counters.
    pub combinations: RwSignal<Option<(U256, U256)>>,
    pub stats: RwSignal<StatsView>,
    config: StoredValue<AppConfig>,
    notices: NoticeBoard,
}

impl WalletContext {
    pub fn new(config: AppConfig, notices: NoticeBoard, provider_available: bool) -> Self {
        Self {
            session: RwSignal::new(Session::default()),
            provider_available: RwSignal::new(provider_available),
            balance: RwSignal::new(None),
            whitelisted: RwSignal::new(None),
            current_price: RwSignal::new(None),
            contract_balance: RwSignal::new(None),
            combinations: RwSignal::new(None),
            stats: RwSignal::new(StatsView::default()),
            config: StoredValue::new(config),
            notices,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn is_connected(&self) -> bool {
        self.session.with(|session| session.connected())
    }

    pub fn is_owner(&self) -> bool {
        self.session.with(|session| session.is_owner)
    }

    /// Contract handle bound to the connected account.
    pub fn wallet_contract(&self) -> Option<NftContract<WalletTransport>> {
        let address = self.config.with_value(|config| config.contract_address);
        self.session
            .with_untracked(|session| session.contract(address, WalletTransport))
    }

    // ------------------------------------------------------------------
    // Session manager
    // ------------------------------------------------------------------

    pub fn connect(&self) {
        self.dispatch(SessionEvent::ConnectRequested);
    }

    pub fn disconnect(&self) {
        self.dispatch(SessionEvent::DisconnectRequested);
    }

    /// Listen for wallet account and network changes for the rest of the page.
    pub fn subscribe(&self) {
        let ctx = *self;
        if let Err(e) = wallet::on_accounts_changed(move |accounts| {
            log::info!("[SESSION] Accounts changed: {} account(s)", accounts.len());
            ctx.dispatch(SessionEvent::AccountsChanged(accounts));
        }) {
            log::warn!("[SESSION] Cannot watch accounts: {}", e);
        }

        if let Err(e) = wallet::on_chain_changed(move || {
            log::info!("[SESSION] Chain changed");
            ctx.dispatch(SessionEvent::ChainChanged);
        }) {
            log::warn!("[SESSION] Cannot watch network: {}", e);
        }
    }

    /// Run `event` through the session reducer and apply every effect it
    /// asks for. Returns the applied effects.
    pub fn dispatch(&self, event: SessionEvent) -> Vec<SessionEffect> {
        let current = self.session.get_untracked();
        let (next, effects) = reduce(&current, event);
        if next != current {
            self.session.set(next);
        }
        for effect in &effects {
            self.apply(effect.clone());
        }
        effects
    }

    fn apply(&self, effect: SessionEffect) {
        let ctx = *self;
        match effect {
            SessionEffect::RequestAccounts => leptos::task::spawn_local(async move {
                log::info!("[SESSION] Requesting wallet accounts");
                match wallet::request_accounts().await {
                    Ok(address) => {
                        log::info!("[SESSION] Connected {}", address);
                        ctx.dispatch(SessionEvent::Connected(address));
                    }
                    Err(e) => {
                        log::error!("[SESSION] Connect failed: {}", e);
                        ctx.dispatch(SessionEvent::ConnectFailed(e.to_string()));
                    }
                }
            }),
            SessionEffect::Reload => wallet::reload_page(),
            SessionEffect::RefreshBalance => ctx.refresh_balance(),
            SessionEffect::CheckOwner => leptos::task::spawn_local(async move {
                let Some(contract) = ctx.wallet_contract() else {
                    return;
                };
                match contract.owner().await {
                    Ok(owner) => {
                        ctx.dispatch(SessionEvent::OwnerResolved(owner));
                    }
                    Err(e) => log::error!("[SESSION] Owner check failed: {}", e),
                }
            }),
            SessionEffect::RefreshWhitelist => ctx.refresh_whitelist(),
            SessionEffect::RefreshContractBalance => ctx.refresh_contract_balance(),
            SessionEffect::Notify(kind, message) => ctx.notices.notify(message, kind, Region::Mint),
        }
    }

    // ------------------------------------------------------------------
    // Refreshes
    // ------------------------------------------------------------------

    pub fn refresh_balance(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let Some(account) = ctx.session.with_untracked(|session| session.address) else {
                return;
            };
            match get_balance(&WalletTransport, account).await {
                Ok(balance) => ctx.balance.set(Some(balance)),
                Err(e) => log::error!("[SESSION] Balance refresh failed: {}", e),
            }
        });
    }

    pub fn refresh_whitelist(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let Some(contract) = ctx.wallet_contract() else {
                return;
            };
            let Some(account) = contract.signer() else {
                return;
            };
            match effective_price(&contract, account, PriceKind::Mint).await {
                Ok(price) => {
                    ctx.whitelisted.set(Some(price.whitelisted));
                    ctx.current_price.set(Some(price.price));
                }
                Err(e) => log::error!("[SESSION] Whitelist refresh failed: {}", e),
            }
        });
    }

    /// Contract balance and combination counters; owner only.
    pub fn refresh_contract_balance(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            if !ctx.session.with_untracked(|session| session.is_owner) {
                return;
            }
            let Some(contract) = ctx.wallet_contract() else {
                return;
            };

            match contract.contract_balance().await {
                Ok(balance) => ctx.contract_balance.set(Some(balance)),
                Err(e) => log::error!("[SESSION] Contract balance refresh failed: {}", e),
            }
            match futures::try_join!(contract.used_combinations(), contract.available_combinations()) {
                Ok(counters) => ctx.combinations.set(Some(counters)),
                Err(e) => log::error!("[SESSION] Combination counters failed: {}", e),
            }
        });
    }

    /// Reload the stats panel through the wallet if connected, else through
    /// the public endpoint.
    pub fn refresh_stats(&self) {
        let ctx = *self;
        leptos::task::spawn_local(async move {
            let config = ctx.config();
            let configured = config.is_contract_configured();

            let report = match ctx.wallet_contract() {
                Some(contract) => load_stats(&contract, configured).await,
                None => {
                    let contract =
                        NftContract::new(config.contract_address, HttpTransport::new(config.rpc_url));
                    load_stats(&contract, configured).await
                }
            };

            ctx.stats.set(report.view);
            if let Some(diagnostic) = report.diagnostic {
                ctx.notices.notify(diagnostic, NoticeKind::Error, Region::Mint);
            }
        });
    }

    /// Run the shared refreshes an action asked for. Panel-local follow-ups
    /// (input clearing, token reload) are handled by the panel.
    pub fn follow_up(&self, follow_up: FollowUp) {
        match follow_up {
            FollowUp::RefreshStats => self.refresh_stats(),
            FollowUp::RefreshBalance => self.refresh_balance(),
            FollowUp::RefreshWhitelist => self.refresh_whitelist(),
            FollowUp::RefreshContractBalance => self.refresh_contract_balance(),
            FollowUp::ReloadToken { .. } | FollowUp::ClearInput => {}
        }
    }
}

pub fn provide_wallet_context(config: AppConfig, notices: NoticeBoard) -> WalletContext {
    let context = WalletContext::new(config, notices, wallet::is_available());
    provide_context(context);
    context
}

pub fn use_wallet_context() -> WalletContext {
    expect_context::<WalletContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mock::MockChain;

    /// Reactive owner plus a native executor; spawned refreshes are queued
    /// but never polled, so nothing reaches the wallet bindings.
    fn coordinator() -> (Owner, WalletContext, NoticeBoard) {
        let _ = any_spawner::Executor::init_futures_executor();
        let owner = Owner::new();
        owner.set();

        let notices = NoticeBoard::new();
        let ctx = WalletContext::new(AppConfig::default(), notices, false);
        (owner, ctx, notices)
    }

    #[test]
    fn test_provider_availability_is_injected() {
        let (_owner, ctx, _) = coordinator();
        assert!(!ctx.provider_available.get_untracked());
        assert!(!ctx.is_connected());
        assert!(ctx.wallet_contract().is_none());
    }

    #[test]
    fn test_connected_applies_refreshes_and_greets() {
        let (_owner, ctx, notices) = coordinator();

        let effects = ctx.dispatch(SessionEvent::Connected(MockChain::USER));

        assert!(ctx.is_connected());
        assert!(!ctx.is_owner());
        assert_eq!(
            effects[..3],
            [
                SessionEffect::RefreshBalance,
                SessionEffect::CheckOwner,
                SessionEffect::RefreshWhitelist,
            ]
        );
        let contract = ctx.wallet_contract().unwrap();
        assert_eq!(contract.signer(), Some(MockChain::USER));
        assert_eq!(contract.address(), AppConfig::default().contract_address);

        let lines = notices.lines(Region::Mint);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].message, "Wallet connected!");
    }

    #[test]
    fn test_owner_resolution_refreshes_contract_balance() {
        let (_owner, ctx, notices) = coordinator();
        ctx.dispatch(SessionEvent::Connected(MockChain::OWNER));

        let effects = ctx.dispatch(SessionEvent::OwnerResolved(MockChain::OWNER));

        assert!(ctx.is_owner());
        assert_eq!(effects, vec![SessionEffect::RefreshContractBalance]);
        // only the greeting; owner resolution itself is silent
        assert_eq!(notices.lines(Region::Mint).len(), 1);
    }

    #[test]
    fn test_non_owner_resolution_applies_nothing() {
        let (_owner, ctx, _) = coordinator();
        ctx.dispatch(SessionEvent::Connected(MockChain::USER));

        let effects = ctx.dispatch(SessionEvent::OwnerResolved(MockChain::OWNER));

        assert!(!ctx.is_owner());
        assert!(effects.is_empty());
    }

    #[test]
    fn test_connect_failure_is_reported_in_mint_region() {
        let (_owner, ctx, notices) = coordinator();

        ctx.dispatch(SessionEvent::ConnectFailed("User rejected the request.".to_string()));

        assert!(!ctx.is_connected());
        let lines = notices.lines(Region::Mint);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].kind, NoticeKind::Error);
        assert_eq!(lines[0].message, "Failed to connect wallet: User rejected the request.");
        assert!(notices.lines(Region::Admin).is_empty());
    }
}
