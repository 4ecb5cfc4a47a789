//! Landing page configuration.
//!
//! [`Settings`] holds the tunables used by the controllers. It is shared by
//! both builds: the server fills it from environment variables with
//! [`Config::from_env()`] (after calling `dotenvy::dotenv()`) and embeds it
//! in the page, the browser reads it back with [`Settings::from_json`].

use serde::{Deserialize, Serialize};

/// Id of the `<script type="application/json">` block carrying the settings
pub const SETTINGS_ELEMENT_ID: &str = "landingSettings";

/// Default localStorage key for the theme preference
pub const DEFAULT_THEME_STORAGE_KEY: &str = "upfinances-theme";

/// Default plan rendered at load
pub const DEFAULT_PLAN: &str = "free";

/// Controller tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// localStorage key holding `"dark"` or `"light"`
    pub theme_storage_key: String,

    /// Lookahead added to the scroll offset when picking the active section
    pub nav_scroll_offset: f64,

    /// Transition delay added per reveal element, in milliseconds
    pub reveal_step_ms: u32,

    /// Upper bound for the reveal transition delay, in milliseconds
    pub reveal_max_delay_ms: u32,

    /// Visible fraction that triggers a reveal
    pub reveal_threshold: f64,

    /// Visible fraction that starts a counter
    pub counter_threshold: f64,

    /// Counter animation length, in milliseconds
    pub counter_duration_ms: f64,

    /// Plan selected when the page loads
    pub default_plan: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_string(),
            nav_scroll_offset: 140.0,
            reveal_step_ms: 45,
            reveal_max_delay_ms: 270,
            reveal_threshold: 0.14,
            counter_threshold: 0.72,
            counter_duration_ms: 1400.0,
            default_plan: DEFAULT_PLAN.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from the JSON embedded in the page
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Serialize for embedding inside a `<script>` element.
    ///
    /// `</` is escaped so a configured string can never close the tag.
    pub fn to_embedded_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| "{}".to_string())
            .replace("</", "<\\/")
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Settings delivered to the browser
    pub settings: Settings,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Settings::default();

        if let Some(key) = non_empty(lookup("UPFINANCES_THEME_KEY")) {
            settings.theme_storage_key = key;
        }
        if let Some(plan) = non_empty(lookup("UPFINANCES_DEFAULT_PLAN")) {
            settings.default_plan = plan;
        }
        if let Some(offset) = parse_var::<f64>(&lookup, "UPFINANCES_NAV_OFFSET") {
            // Non-finite values serialize as null and would break the embedded block
            if offset.is_finite() {
                settings.nav_scroll_offset = offset;
            } else {
                tracing::warn!("Ignoring non-finite UPFINANCES_NAV_OFFSET");
            }
        }
        if let Some(duration) = parse_var::<f64>(&lookup, "UPFINANCES_COUNTER_DURATION_MS") {
            if duration > 0.0 && duration.is_finite() {
                settings.counter_duration_ms = duration;
            } else {
                tracing::warn!("Ignoring non-positive or non-finite UPFINANCES_COUNTER_DURATION_MS");
            }
        }

        Self { settings }
    }

    /// Whether any value differs from the built-in defaults
    pub fn is_customized(&self) -> bool {
        self.settings != Settings::default()
    }
}

#[cfg(feature = "ssr")]
fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(feature = "ssr")]
fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
) -> Option<T> {
    let raw = non_empty(lookup(name))?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring invalid value for {}: {:?}", name, raw);
            None
        }
    }
}
