//! Browser adapters for the landing page controllers
//!
//! Only compiled for the `hydrate` (wasm) build.

mod dom;
mod scheduler;
mod storage;

use std::rc::Rc;

use leptos::logging::warn;

use crate::core::config::{SETTINGS_ELEMENT_ID, Settings};
use crate::core::{Landing, PreferenceStore};

pub use dom::WebDom;
pub use scheduler::BrowserScheduler;
pub use storage::BrowserStorage;

/// Mount every controller on the current document.
///
/// Returns `None` when there is no document to attach to.
pub fn start() -> Option<Landing<WebDom, BrowserStorage>> {
    let dom = Rc::new(WebDom::new()?);
    let settings = read_settings(&dom);
    let scheduler = Rc::new(BrowserScheduler::new(dom.window().clone()));
    let store = PreferenceStore::from_result(BrowserStorage::local());
    let year = js_sys::Date::new_0().get_full_year() as i32;

    Some(Landing::mount(dom, store, scheduler, &settings, year))
}

/// Settings embedded by the server, or the defaults
fn read_settings(dom: &WebDom) -> Settings {
    let Some(raw) = dom.text_of(SETTINGS_ELEMENT_ID) else {
        return Settings::default();
    };
    match Settings::from_json(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring malformed landing settings: {}", e);
            Settings::default()
        }
    }
}
