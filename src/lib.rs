//! UpFinances - landing page for the UpFinances personal finance app
//!
//! Server rendered with Leptos, then hydrated in the browser where the
//! interactive controllers in [`core`] are mounted on the page.

#![recursion_limit = "512"]

pub mod app;
pub mod core;
pub mod ui;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);

    if web::start().is_none() {
        leptos::logging::warn!("No document available, landing controllers not mounted");
    }
}
