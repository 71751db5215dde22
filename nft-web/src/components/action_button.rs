//! Button bound to one contract action

use leptos::prelude::*;

use crate::services::actions::{execute, ActionKind, ActionPhase, FollowUp, SUBMITTED_MESSAGE};
use crate::state::notices::{use_notice_board, NoticeKind};
use crate::state::pending::PendingGuard;
use crate::state::viewer::ViewerContext;
use crate::state::wallet::use_wallet_context;

/// Runs `kind` with the current value of `input` when clicked.
///
/// While the transaction is in flight the button is disabled and shows the
/// pending label; it always comes back to its resting label.
#[component]
pub fn ActionButton(
    kind: ActionKind,
    #[prop(optional)] input: Option<RwSignal<String>>,
    #[prop(optional, into)] variant: String,
) -> impl IntoView {
    let wallet_ctx = use_wallet_context();
    let notices = use_notice_board();
    let viewer = use_context::<ViewerContext>();
    let pending = RwSignal::new(false);

    let on_click = move |_| {
        if pending.get_untracked() {
            return;
        }
        let text = input.map(|input| input.get_untracked()).unwrap_or_default();

        leptos::task::spawn_local(async move {
            let contract = wallet_ctx.wallet_contract();
            let session = wallet_ctx.session.get_untracked();
            let region = kind.region();

            let mut guard = None;
            let outcome = execute(contract.as_ref(), &session, kind, &text, |phase| match phase {
                ActionPhase::Submitting => guard = Some(PendingGuard::enter(pending)),
                ActionPhase::AwaitingConfirmation(_) => {
                    notices.notify(SUBMITTED_MESSAGE, NoticeKind::Success, region)
                }
                ActionPhase::Settled => {}
            })
            .await;
            drop(guard);

            if let Some((kind, message)) = outcome.notice() {
                notices.notify(message, kind, region);
            }

            for follow_up in outcome.follow_ups() {
                match *follow_up {
                    FollowUp::ClearInput => {
                        if let Some(input) = input {
                            input.set(String::new());
                        }
                    }
                    FollowUp::ReloadToken { token_id, delay_ms } => {
                        let Some(viewer) = viewer else {
                            continue;
                        };
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
                            viewer.token_input.set(token_id.to_string());
                            viewer.load(wallet_ctx, notices);
                        });
                    }
                    other => wallet_ctx.follow_up(other),
                }
            }
        });
    };

    let class = format!("btn {}", variant).trim_end().to_string();

    view! {
        <button
            class=class
            disabled=move || pending.get()
            on:click=on_click
        >
            <Show when=move || pending.get()>
                <span class="loading"></span>
                " "
            </Show>
            {move || if pending.get() { kind.pending_label() } else { kind.resting_label() }}
        </button>
    }
}
