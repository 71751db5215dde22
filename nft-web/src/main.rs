//! Simple Feature NFT - browser front-end
//!
//! Connect an injected wallet, mint and remint tokens, inspect them, and (for
//! the contract owner) manage the whitelist and withdraw funds.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod config;
mod core;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Simple Feature NFT starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading screen once the WASM module is running
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("No document available");
        return;
    };

    let Some(loading_element) = document.get_element_by_id("leptos-loading") else {
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Could not hide loading screen: {:?}", e);
        }
    }
}
