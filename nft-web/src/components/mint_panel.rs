//! Mint panel

use leptos::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::message_region::MessageRegion;
use crate::services::actions::ActionKind;
use crate::state::notices::Region;
use crate::state::wallet::{use_wallet_context, WalletContext};
use crate::utils::constants::METAMASK_DOWNLOAD_URL;

/// Fill an empty recipient field with the connected address.
pub fn autofill_recipient(wallet_ctx: WalletContext, input: RwSignal<String>) {
    if !input.get_untracked().is_empty() {
        return;
    }
    if let Some(address) = wallet_ctx.session.with_untracked(|session| session.address) {
        input.set(address.to_checksum(None));
    }
}

#[component]
pub fn MintPanel() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let recipient = RwSignal::new(String::new());

    view! {
        <section class="card mint-panel">
            <h2 class="card-title">"Mint"</h2>
            <input
                type="text"
                placeholder="Recipient address (0x...)"
                prop:value=move || recipient.get()
                on:input=move |ev| recipient.set(event_target_value(&ev))
                on:focus=move |_| autofill_recipient(wallet_ctx, recipient)
            />
            <ActionButton kind=ActionKind::Mint input=recipient/>

            <Show when=move || !wallet_ctx.provider_available.get()>
                <InstallGuide/>
            </Show>
            <MessageRegion region=Region::Mint/>
        </section>
    }
}

#[component]
fn InstallGuide() -> impl IntoView {
    view! {
        <div class="install-guide" style="background: #ffebee; padding: 15px; border-radius: 5px; margin: 10px 0;">
            <h3>"Please install MetaMask"</h3>
            <p>"You need the MetaMask browser extension to use this app."</p>
            <a
                href=METAMASK_DOWNLOAD_URL
                target="_blank"
                rel="noopener noreferrer"
                class="btn"
                style="background: #f6851b; color: white; text-decoration: none; display: inline-block;"
            >
                "Install MetaMask"
            </a>
        </div>
    }
}
