//! Settings for pattern-widgets.
//!
//! This module provides the [`Settings`] struct, which holds the locale and
//! picker defaults the option builders start from, and [`LazySettings`], a
//! globally-accessible, lazily-initialized settings instance.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// The complete set of widget settings.
///
/// # Examples
///
/// ```
/// use pattern_widgets_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert_eq!(settings.language_code, "en");
/// assert_eq!(settings.date_format, "mmmm d, yyyy");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // ── Core ─────────────────────────────────────────────────────────

    /// Whether debug mode is enabled. Selects the pretty log format.
    pub debug: bool,

    // ── Logging ──────────────────────────────────────────────────────

    /// The log level (e.g. "info", "debug", "warn").
    pub log_level: String,

    // ── Internationalization ─────────────────────────────────────────

    /// Language used when a request does not carry one (e.g. "en").
    pub language_code: String,

    // ── Picker defaults ──────────────────────────────────────────────

    /// Display format passed to the date picker when no translation overrides it.
    pub date_format: String,
    /// Display format passed to the time picker when no translation overrides it.
    pub time_format: String,
    /// How many years the date picker's year dropdown spans.
    pub select_years: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            language_code: "en".to_string(),
            date_format: "mmmm d, yyyy".to_string(),
            time_format: "h:i a".to_string(),
            select_years: 200,
        }
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup, then use
/// [`get`](LazySettings::get) to access them. [`get_or_default`](LazySettings::get_or_default)
/// falls back to the built-in defaults when nothing was configured.
pub struct LazySettings {
    inner: OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, initializing them with defaults if
    /// nothing was configured yet.
    pub fn get_or_default(&self) -> &Settings {
        self.inner.get_or_init(Settings::default)
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();
