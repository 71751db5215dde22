//! Simple Feature NFT front-end - Leptos root component

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::config::AppConfig;
use crate::pages::HomePage;
use crate::state::notices::provide_notice_board;
use crate::state::viewer::provide_viewer_context;
use crate::state::wallet::provide_wallet_context;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "[CONFIG] Contract {} via {}",
        config.contract_address,
        config.rpc_url
    );

    let notices = provide_notice_board();
    let wallet_ctx = provide_wallet_context(config, notices);
    provide_viewer_context();

    if wallet_ctx.provider_available.get_untracked() {
        wallet_ctx.subscribe();
    } else {
        log::warn!("[SESSION] No injected wallet found");
    }
    wallet_ctx.refresh_stats();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="app-container" style="display: flex; justify-content: center; align-items: center; min-height: calc(100vh - 60px);">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1 style="margin-bottom: 16px; font-size: 32px; font-weight: 700;">"404 - Page Not Found"</h1>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="margin-top: 20px; display: inline-block;">
                        "Go to Home"
                    </span>
                </A>
            </div>
        </div>
    }
}
