//! Landing page controllers and the capabilities they run against
//!
//! Everything here is target independent: the browser adapters live in the
//! `web` module (hydrate builds), tests use the doubles in `testing`.

pub mod billing;
pub mod config;
pub mod counter;
pub mod dom;
pub mod faq;
pub mod footer;
pub mod format;
pub mod landing;
pub mod navigation;
pub mod plans;
pub mod reveal;
pub mod scheduler;
pub mod store;
pub mod theme;
#[cfg(test)]
pub(crate) mod testing;

pub use config::Settings;
pub use dom::{ClickAction, Dom};
pub use landing::Landing;
pub use plans::{Plan, PlanCatalog};
pub use scheduler::{FrameControl, OneShot, Scheduler};
pub use store::{KeyValueStore, PreferenceStore, StoreError};
pub use theme::Theme;
