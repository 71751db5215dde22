//! NFT viewer panel

use leptos::prelude::*;

use crate::components::action_button::ActionButton;
use crate::components::message_region::MessageRegion;
use crate::services::actions::ActionKind;
use crate::services::viewer::{LOADING_LABEL, LOAD_LABEL};
use crate::state::notices::{use_notice_board, Region};
use crate::state::viewer::use_viewer_context;
use crate::state::wallet::use_wallet_context;

#[component]
pub fn NftViewer() -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notices = use_notice_board();
    let viewer = use_viewer_context();

    let on_load = move |_| {
        if !viewer.loading.get_untracked() {
            viewer.load(wallet_ctx, notices);
        }
    };

    view! {
        <section class="card nft-viewer">
            <h2 class="card-title">"View NFT"</h2>
            <input
                type="number"
                min="1"
                placeholder="Token ID"
                prop:value=move || viewer.token_input.get()
                on:input=move |ev| viewer.token_input.set(event_target_value(&ev))
            />
            <button class="btn" disabled=move || viewer.loading.get() on:click=on_load>
                <Show when=move || viewer.loading.get()>
                    <span class="loading"></span>
                    " "
                </Show>
                {move || if viewer.loading.get() { LOADING_LABEL } else { LOAD_LABEL }}
            </button>

            {move || viewer.token.get().map(|token| {
                let can_remint = token.can_remint;
                let remint_target = RwSignal::new(token.remint_input());
                view! {
                    <div class="nft-display">
                        <div class="nft-preview" inner_html=token.svg></div>
                        <h3 class="nft-name">{token.title}</h3>
                        <p class="nft-owner">"Owner: " {token.owner_short}</p>
                        <div class="nft-attributes">
                            {token.attributes.into_iter().map(|attribute| view! {
                                <div class="attribute">
                                    <div class="attribute-name">{attribute.name}</div>
                                    <div class="attribute-value">{attribute.value}</div>
                                </div>
                            }).collect_view()}
                        </div>
                        <Show when=move || can_remint>
                            <ActionButton kind=ActionKind::Remint input=remint_target/>
                        </Show>
                    </div>
                }
            })}

            <MessageRegion region=Region::Viewer/>
        </section>
    }
}
