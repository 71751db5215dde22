//! Home page: every panel on one screen

use leptos::prelude::*;

use crate::components::{AdminPanel, MintPanel, NftViewer, StatsPanel};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main style="max-width: 1200px; margin: 0 auto; padding: 24px; display: grid; gap: 24px;">
            <StatsPanel/>
            <MintPanel/>
            <NftViewer/>
            <AdminPanel/>
        </main>
    }
}
