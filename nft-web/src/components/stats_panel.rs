//! Collection stats and the connected account's price

use leptos::prelude::*;
use shared::units::display_ether;

use crate::state::wallet::use_wallet_context;

#[component]
pub fn StatsPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let stats = wallet_ctx.stats;

    let header = move || {
        stats.with(|stats| {
            if stats.symbol.is_empty() {
                stats.name.clone()
            } else {
                format!("{} ({})", stats.name, stats.symbol)
            }
        })
    };

    let whitelist_status = move || match wallet_ctx.whitelisted.get() {
        Some(true) => "✅",
        Some(false) => "❌",
        None => "-",
    };

    let current_price = move || {
        wallet_ctx
            .current_price
            .get()
            .map(display_ether)
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <section class="card stats-panel">
            <h2 class="card-title">{header}</h2>
            <div class="stats-grid">
                <div class="stat">
                    <span class="stat-label">"Minted"</span>
                    <span class="stat-value">
                        {move || stats.with(|s| s.total_minted.clone())}
                        " / "
                        {move || stats.with(|s| s.max_supply.clone())}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat-label">"Mint price"</span>
                    <span class="stat-value">{move || stats.with(|s| s.mint_price.clone())} " ETH"</span>
                </div>
                <Show when=move || wallet_ctx.is_connected()>
                    <div class="stat">
                        <span class="stat-label">"Whitelisted"</span>
                        <span class="stat-value">{whitelist_status}</span>
                    </div>
                    <div class="stat">
                        <span class="stat-label">"Your price"</span>
                        <span class="stat-value">{current_price}</span>
                    </div>
                </Show>
            </div>
        </section>
    }
}
