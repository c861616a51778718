//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (deep-merged over the defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `PATTERN_WIDGETS_DEBUG` | `debug` |
//! | `PATTERN_WIDGETS_LOG_LEVEL` | `log_level` |
//! | `PATTERN_WIDGETS_LANGUAGE_CODE` | `language_code` |
//! | `PATTERN_WIDGETS_DATE_FORMAT` | `date_format` |
//! | `PATTERN_WIDGETS_TIME_FORMAT` | `time_format` |
//! | `PATTERN_WIDGETS_SELECT_YEARS` | `select_years` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use pattern_widgets_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file("config/widgets.toml").unwrap();
//! let settings = settings_loader::from_json_file_with_env("config/widgets.json").unwrap();
//! ```

use std::path::Path;

use crate::error::WidgetError;
use crate::settings::Settings;
use crate::utils::dict_merge;

/// Loads settings from a TOML string.
///
/// Any fields not present in the TOML keep their default values.
///
/// # Errors
///
/// Returns an error if the TOML is malformed or cannot be deserialized.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, WidgetError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| WidgetError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, WidgetError> {
    from_toml_str(&read_config(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the TOML is malformed.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, WidgetError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or cannot be deserialized.
pub fn from_json_str(json_str: &str) -> Result<Settings, WidgetError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| WidgetError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, WidgetError> {
    from_json_str(&read_config(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be read or the JSON is malformed.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, WidgetError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies `PATTERN_WIDGETS_*` environment variable overrides to a settings struct.
///
/// Unparseable numeric values are ignored and leave the setting unchanged.
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("PATTERN_WIDGETS_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("PATTERN_WIDGETS_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("PATTERN_WIDGETS_LANGUAGE_CODE") {
        settings.language_code = val;
    }

    if let Ok(val) = std::env::var("PATTERN_WIDGETS_DATE_FORMAT") {
        settings.date_format = val;
    }

    if let Ok(val) = std::env::var("PATTERN_WIDGETS_TIME_FORMAT") {
        settings.time_format = val;
    }

    if let Ok(val) = std::env::var("PATTERN_WIDGETS_SELECT_YEARS") {
        if let Ok(years) = val.parse::<u32>() {
            settings.select_years = years;
        }
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, kind: &str) -> Result<String, WidgetError> {
    std::fs::read_to_string(path).map_err(|e| {
        WidgetError::ConfigurationError(format!(
            "Failed to read {kind} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(value: serde_json::Value, kind: &str) -> Result<Settings, WidgetError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        WidgetError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = dict_merge(&default_json, &value);
    serde_json::from_value(merged).map_err(|e| {
        WidgetError::ConfigurationError(format!("Failed to deserialize settings from {kind}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}
