//! Owner-only admin panel

use leptos::prelude::*;
use shared::units::format_ether_fixed;

use crate::components::action_button::ActionButton;
use crate::components::message_region::MessageRegion;
use crate::components::mint_panel::autofill_recipient;
use crate::services::actions::ActionKind;
use crate::state::notices::Region;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn AdminPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();

    let owner_mint_recipient = RwSignal::new(String::new());
    let owner_remint_token = RwSignal::new(String::new());
    let whitelist_address = RwSignal::new(String::new());

    let contract_balance = move || {
        wallet_ctx
            .contract_balance
            .get()
            .map(|wei| format!("{} ETH", format_ether_fixed(wei, 4)))
            .unwrap_or_else(|| "-".to_string())
    };

    let combinations = move || {
        wallet_ctx
            .combinations
            .get()
            .map(|(used, available)| format!("{} used / {} available", used, available))
            .unwrap_or_else(|| "-".to_string())
    };

    view! {
        <Show when=move || wallet_ctx.is_owner()>
            <section class="card admin-panel">
                <h2 class="card-title">"Admin"</h2>
                <p>"Contract balance: " {contract_balance}</p>
                <p>"Combinations: " {combinations}</p>

                <div class="admin-row">
                    <input
                        type="text"
                        placeholder="Recipient address (0x...)"
                        prop:value=move || owner_mint_recipient.get()
                        on:input=move |ev| owner_mint_recipient.set(event_target_value(&ev))
                        on:focus=move |_| autofill_recipient(wallet_ctx, owner_mint_recipient)
                    />
                    <ActionButton kind=ActionKind::OwnerMint input=owner_mint_recipient/>
                </div>

                <div class="admin-row">
                    <input
                        type="number"
                        min="1"
                        placeholder="Token ID"
                        prop:value=move || owner_remint_token.get()
                        on:input=move |ev| owner_remint_token.set(event_target_value(&ev))
                    />
                    <ActionButton kind=ActionKind::OwnerRemint input=owner_remint_token/>
                </div>

                <div class="admin-row">
                    <input
                        type="text"
                        placeholder="Address to whitelist (0x...)"
                        prop:value=move || whitelist_address.get()
                        on:input=move |ev| whitelist_address.set(event_target_value(&ev))
                    />
                    <ActionButton kind=ActionKind::AddToWhitelist input=whitelist_address/>
                    <ActionButton kind=ActionKind::RemoveFromWhitelist input=whitelist_address variant="btn-secondary"/>
                </div>

                <ActionButton kind=ActionKind::Withdraw variant="btn-danger"/>

                <MessageRegion region=Region::Admin/>
            </section>
        </Show>
    }
}
