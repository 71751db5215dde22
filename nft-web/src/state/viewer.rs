//! NFT viewer state
//!
//! The token id field, the load button's pending flag and the currently
//! displayed token. `token` is `None` while the display is hidden.

use leptos::prelude::*;

use crate::core::error::AppError;
use crate::services::viewer::{load_failed_message, load_token, TokenView, LOADED_MESSAGE};
use crate::state::notices::{NoticeBoard, NoticeKind, Region};
use crate::state::pending::PendingGuard;
use crate::state::wallet::WalletContext;

#[derive(Clone, Copy)]
pub struct ViewerContext {
    pub token_input: RwSignal<String>,
    pub loading: RwSignal<bool>,
    pub token: RwSignal<Option<TokenView>>,
}

impl ViewerContext {
    pub fn new() -> Self {
        Self {
            token_input: RwSignal::new(String::new()),
            loading: RwSignal::new(false),
            token: RwSignal::new(None),
        }
    }

    /// Load the token typed in the input field.
    pub fn load(&self, wallet: WalletContext, notices: NoticeBoard) {
        let input = self.token_input.get_untracked();
        let viewer = *self;

        leptos::task::spawn_local(async move {
            let contract = wallet.wallet_contract();
            let session = wallet.session.get_untracked();

            let result = {
                let _pending = PendingGuard::enter(viewer.loading);
                load_token(contract.as_ref(), &session, &input).await
            };

            let (token, kind, message) = settle_load(result);
            viewer.token.set(token);
            notices.notify(message, kind, Region::Viewer);
        });
    }
}

/// What the display and the viewer region show after a load.
fn settle_load(result: Result<TokenView, AppError>) -> (Option<TokenView>, NoticeKind, String) {
    match result {
        Ok(token) => {
            log::info!("[VIEWER] Loaded {}", token.title);
            (Some(token), NoticeKind::Success, LOADED_MESSAGE.to_string())
        }
        Err(err) => {
            log::error!("[VIEWER] Load failed: {}", err);
            (None, NoticeKind::Error, load_failed_message(&err))
        }
    }
}

pub fn provide_viewer_context() -> ViewerContext {
    let context = ViewerContext::new();
    provide_context(context);
    context
}

pub fn use_viewer_context() -> ViewerContext {
    expect_context::<ViewerContext>()
}
