//! Light/dark theme switching with a persisted preference
//!
//! Provides:
//! - [`Theme`] with the normalization rule used everywhere a raw value is read
//! - [`ThemeController`] resolving the initial theme (stored → OS → light),
//!   applying it to the document and persisting toggles

use std::fmt;
use std::rc::Rc;

use super::dom::{ClickAction, Dom};
use super::store::{KeyValueStore, PreferenceStore};

/// Attribute on `<body>` carrying the applied theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Class set on the toggle button while the dark theme is active
pub const DARK_TOGGLE_CLASS: &str = "is-dark";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Strict parse: only the two persisted spellings are accepted
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Lenient parse: anything other than `"dark"` is light
    pub fn normalize(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Visible text of the toggle button
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// Accessible label describing what a click will do
    pub fn toggle_aria_label(self) -> &'static str {
        match self {
            Theme::Light => "Alternar para tema escuro",
            Theme::Dark => "Alternar para tema claro",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme state bound to the document and the preference store
pub struct ThemeController<D: Dom, K> {
    dom: Rc<D>,
    store: PreferenceStore<K>,
    storage_key: String,
    toggle: Option<D::Element>,
    toggle_text: Option<D::Element>,
}

impl<D: Dom, K: KeyValueStore> ThemeController<D, K> {
    /// Bind to `#themeToggle` / `#themeToggleText` (both optional)
    pub fn new(dom: Rc<D>, store: PreferenceStore<K>, storage_key: impl Into<String>) -> Self {
        let toggle = dom.by_id("themeToggle");
        let toggle_text = dom.by_id("themeToggleText");
        Self {
            dom,
            store,
            storage_key: storage_key.into(),
            toggle,
            toggle_text,
        }
    }

    #[cfg(test)]
    pub(crate) fn toggle_element(&self) -> Option<&D::Element> {
        self.toggle.as_ref()
    }

    /// Stored preference if valid, else the OS color scheme, else light
    pub fn resolve_initial_theme(&self) -> Theme {
        if let Some(theme) = self
            .store
            .get(&self.storage_key)
            .as_deref()
            .and_then(Theme::from_stored)
        {
            return theme;
        }

        if self.dom.prefers_dark_scheme() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Reflect a theme on `<body>` and on the toggle button
    pub fn apply_theme(&self, theme: Theme) {
        if let Some(body) = self.dom.body() {
            self.dom.set_attribute(&body, THEME_ATTRIBUTE, theme.as_str());
        }

        if let Some(toggle) = &self.toggle {
            self.dom.set_class(toggle, DARK_TOGGLE_CLASS, theme.is_dark());
            self.dom
                .set_attribute(toggle, "aria-pressed", if theme.is_dark() { "true" } else { "false" });
            self.dom
                .set_attribute(toggle, "aria-label", theme.toggle_aria_label());
        }

        if let Some(text) = &self.toggle_text {
            self.dom.set_text(text, theme.label());
        }
    }

    /// Apply a raw value, normalizing anything but `"dark"` to light
    pub fn apply_raw(&self, value: &str) -> Theme {
        let theme = Theme::normalize(value);
        self.apply_theme(theme);
        theme
    }

    /// Theme currently applied to the document
    pub fn current_theme(&self) -> Theme {
        self.dom
            .body()
            .and_then(|body| self.dom.attribute(&body, THEME_ATTRIBUTE))
            .map(|value| Theme::normalize(&value))
            .unwrap_or_default()
    }

    /// Flip the applied theme and persist the new value
    pub fn toggle(&self) -> Theme {
        let next = self.current_theme().toggled();
        self.apply_theme(next);
        self.store.set(&self.storage_key, next.as_str());
        next
    }

    /// Apply the initial theme and wire the toggle button
    pub fn mount(self: &Rc<Self>)
    where
        D: 'static,
        K: 'static,
    {
        self.apply_theme(self.resolve_initial_theme());

        if let Some(toggle) = &self.toggle {
            let controller = Rc::clone(self);
            self.dom.on_click(
                toggle,
                Rc::new(move || {
                    controller.toggle();
                    ClickAction::Continue
                }),
            );
        }
    }
}
