//! Transient status lines for one region

use leptos::prelude::*;

use crate::state::notices::{use_notice_board, Region};

#[component]
pub fn MessageRegion(region: Region) -> impl IntoView {
    let notices = use_notice_board();

    view! {
        <div class="messages">
            <For
                each=move || notices.lines(region)
                key=|notice| notice.id
                children=move |notice| {
                    view! { <div class=notice.kind.class()>{notice.message}</div> }
                }
            />
        </div>
    }
}
