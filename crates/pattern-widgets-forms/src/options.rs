//! Request-derived option builders for the date and time pickers.
//!
//! The mappings produced here are merged into a widget's pattern options
//! under the `date` and `time` keys.

use std::fmt;

use pattern_widgets_core::i18n;
use pattern_widgets_core::{PatternOptions, Settings, SETTINGS};
use pattern_widgets_http::WidgetRequest;
use serde_json::{json, Value};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// Pickers expect weeks to start on Sunday.
const WEEKDAYS: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

const WEEKDAYS_SHORT: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Builds the locale/format mappings for a request.
pub trait OptionsProvider: Send + Sync + fmt::Debug {
    /// Options for the date part of a picker.
    fn date_options(&self, request: &WidgetRequest) -> PatternOptions;

    /// Options for the time part of a picker.
    fn time_options(&self, request: &WidgetRequest) -> PatternOptions;
}

/// Options built from [`Settings`] and the translation catalog.
///
/// Format strings are looked up under the `pickadate_date_format` and
/// `pickadate_time_format` msgids so a language can override them; the
/// settings supply the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultOptions {
    date_format: String,
    time_format: String,
    select_years: u32,
}

impl DefaultOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            date_format: settings.date_format.clone(),
            time_format: settings.time_format.clone(),
            select_years: settings.select_years,
        }
    }
}

impl Default for DefaultOptions {
    fn default() -> Self {
        Self::from_settings(SETTINGS.get_or_default())
    }
}

fn translate_or(language: &str, msgid: &str, default: &str) -> String {
    let translated = i18n::gettext(language, msgid);
    if translated == msgid {
        default.to_string()
    } else {
        translated
    }
}

fn names(language: &str, context: &str, msgids: &[&str]) -> Value {
    Value::Array(
        msgids
            .iter()
            .map(|msgid| Value::String(i18n::pgettext(language, context, msgid)))
            .collect(),
    )
}

fn into_options(value: Value) -> PatternOptions {
    match value {
        Value::Object(map) => map,
        _ => PatternOptions::new(),
    }
}

impl OptionsProvider for DefaultOptions {
    fn date_options(&self, request: &WidgetRequest) -> PatternOptions {
        let lang = request.language();
        into_options(json!({
            "selectYears": self.select_years,
            "format": translate_or(lang, "pickadate_date_format", &self.date_format),
            "placeholder": i18n::gettext(lang, "Enter date..."),
            "today": i18n::gettext(lang, "Today"),
            "clear": i18n::gettext(lang, "Clear"),
            "monthsFull": names(lang, "month", &MONTHS),
            "monthsShort": names(lang, "month_abbr", &MONTHS_SHORT),
            "weekdaysFull": names(lang, "weekday", &WEEKDAYS),
            "weekdaysShort": names(lang, "weekday_abbr", &WEEKDAYS_SHORT),
        }))
    }

    fn time_options(&self, request: &WidgetRequest) -> PatternOptions {
        let lang = request.language();
        into_options(json!({
            "format": translate_or(lang, "pickadate_time_format", &self.time_format),
            "placeholder": i18n::gettext(lang, "Enter time..."),
            "today": i18n::gettext(lang, "Today"),
        }))
    }
}
