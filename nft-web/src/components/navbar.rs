//! Navigation bar with the wallet connection status

use leptos::prelude::*;
use leptos_router::components::A;
use shared::units::format_ether_fixed;
use shared::utils::truncate_address;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let short_address = move || {
        wallet_ctx
            .session
            .with(|session| session.address)
            .map(|address| truncate_address(&address.to_checksum(None)))
            .unwrap_or_else(|| "Not connected".to_string())
    };

    let balance = move || {
        wallet_ctx
            .balance
            .get()
            .map(|wei| format!("{} ETH", format_ether_fixed(wei, 4)))
            .unwrap_or_else(|| "-".to_string())
    };

    let connect_label = move || {
        if wallet_ctx.provider_available.get() {
            "Connect Wallet"
        } else {
            "Install MetaMask"
        }
    };

    view! {
        <nav>
            <div style="max-width: 1200px; margin: 0 auto; padding: 0 24px; display: flex; justify-content: space-between; align-items: center;">
                <A href="/" attr:class="nav-link-clean">
                    <span class="nav-title">"Simple Feature NFT"</span>
                </A>

                <div class="wallet-status" style="display: flex; align-items: center; gap: 12px;">
                    <span class="status-dot" class:connected=move || wallet_ctx.is_connected()></span>
                    <span class="wallet-address" style="font-family: monospace;">{short_address}</span>
                    <Show when=move || wallet_ctx.is_connected()>
                        <span class="wallet-balance">{balance}</span>
                    </Show>

                    <Show
                        when=move || wallet_ctx.is_connected()
                        fallback=move || view! {
                            <button
                                class="btn"
                                disabled=move || !wallet_ctx.provider_available.get()
                                on:click=move |_| wallet_ctx.connect()
                            >
                                {connect_label}
                            </button>
                        }
                    >
                        <button class="btn btn-secondary" on:click=move |_| wallet_ctx.disconnect()>
                            "Disconnect"
                        </button>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
