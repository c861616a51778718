//! Date and date-time widgets for the `pickadate` pattern.
//!
//! Values travel to the picker as `YYYY-MM-DD` or `YYYY-MM-DD HH:MM` and are
//! parsed back from the same shapes. Parsing is best-effort: anything that is
//! not a valid date (or date-time) yields the caller's empty marker, silently.
//!
//! [`DatetimeWidget`] composes a [`DateWidget`]: it reuses the date widget's
//! configuration and option merging and adds the time part on top.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use pattern_widgets_core::{dict_merge, PatternOptions};
use pattern_widgets_http::{QueryDict, WidgetRequest};
use serde_json::Value;

use crate::field::{Content, Field};
use crate::options::{DefaultOptions, OptionsProvider};
use crate::value::{date_string, datetime_string, FieldValue, FormExtras};
use crate::widgets::{
    current_value, BaseWidget, PatternWidget, ProcessForm, RenderArgs, WidgetConfig, WidgetKind,
};

/// Earliest and latest years a submitted date may carry.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

// ── Formatting ───────────────────────────────────────────────────────────

/// Formats a field value for the date picker.
///
/// Dates and date-times become `YYYY-MM-DD`; everything else, including
/// `Empty` and raw submitted text, passes through unchanged.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pattern_widgets_forms::dates::format_date;
/// use pattern_widgets_forms::value::FieldValue;
///
/// let d = NaiveDate::from_ymd_opt(2021, 3, 7).unwrap();
/// assert_eq!(format_date(&d.into()), FieldValue::from("2021-03-07"));
/// assert_eq!(format_date(&FieldValue::Empty), FieldValue::Empty);
/// ```
pub fn format_date(value: &FieldValue) -> FieldValue {
    match value {
        FieldValue::Date(date) => FieldValue::Text(date_string(*date)),
        FieldValue::DateTime(dt) => FieldValue::Text(date_string(dt.date())),
        other => other.clone(),
    }
}

/// Formats a field value for the date-time picker.
///
/// Date-times become `YYYY-MM-DD HH:MM`. Any non-empty text that ends up
/// without a time part (a date, or a submitted date-only string) gets
/// `" 00:00"` appended.
pub fn format_datetime(value: &FieldValue) -> FieldValue {
    let formatted = match value {
        FieldValue::DateTime(dt) => FieldValue::Text(datetime_string(*dt)),
        other => format_date(other),
    };
    match formatted {
        FieldValue::Text(text) if text.split_whitespace().count() == 1 => {
            FieldValue::Text(format!("{text} 00:00"))
        }
        other => other,
    }
}

// ── Parsing ──────────────────────────────────────────────────────────────

fn parse_parts(token: &str, separator: char) -> Option<Vec<u32>> {
    token
        .split(separator)
        .map(|part| part.trim().parse::<u32>().ok())
        .collect()
}

fn build_date(parts: &[u32]) -> Option<NaiveDate> {
    let [year, month, day] = parts else {
        return None;
    };
    let year = i32::try_from(*year).ok()?;
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, *month, *day)
}

/// Parses `YYYY-MM-DD` (components need not be zero-padded).
///
/// Returns `None` for a wrong component count, non-numeric components, or an
/// impossible calendar date such as `2020-02-30`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    build_date(&parse_parts(input, '-')?)
}

/// Parses `YYYY-MM-DD HH:MM`, also accepting `HH:MM:SS`.
///
/// Both the date token and the time token are required. Input with a third
/// whitespace-separated token (`"2024-01-15 10:30 PM"`) is rejected rather
/// than having the extra token ignored.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let mut tokens = input.split_whitespace();
    let (Some(date_token), Some(time_token), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        return None;
    };
    let date = parse_date(date_token)?;
    let time = parse_parts(time_token, ':')?;
    match time.as_slice() {
        [hour, minute] => date.and_hms_opt(*hour, *minute, 0),
        [hour, minute, second] => date.and_hms_opt(*hour, *minute, *second),
        _ => None,
    }
}

/// Reads the field's submitted string, treating absent and empty alike.
fn submitted<'a>(field: &dyn Field, form: &'a QueryDict) -> Option<&'a str> {
    form.get(field.name()).filter(|value| !value.is_empty())
}

// ── Widgets ──────────────────────────────────────────────────────────────

/// Date-only widget for date fields.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use chrono::NaiveDate;
/// use pattern_widgets_forms::dates::DateWidget;
/// use pattern_widgets_forms::field::FieldDef;
/// use pattern_widgets_forms::value::FieldValue;
/// use pattern_widgets_forms::widgets::PatternWidget;
/// use pattern_widgets_http::WidgetRequest;
///
/// let mut content = HashMap::new();
/// content.insert(
///     "start".to_string(),
///     FieldValue::from(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
/// );
/// let field = FieldDef::new("start", "DateTimeField");
///
/// let args = DateWidget::default().base_args(&content, &field, &WidgetRequest::default());
/// assert_eq!(args.value, FieldValue::from("2024-01-05"));
/// assert_eq!(args.pattern_options["time"], false);
/// ```
#[derive(Debug, Clone)]
pub struct DateWidget {
    config: WidgetConfig,
    options: Arc<dyn OptionsProvider>,
}

impl Default for DateWidget {
    fn default() -> Self {
        Self::with_config(WidgetConfig::builtin(Self::PATTERN))
    }
}

impl DateWidget {
    /// The pattern the built-in configuration uses.
    pub const PATTERN: &'static str = "pickadate";

    /// Creates a date widget with a custom configuration and the default
    /// option builders.
    pub fn with_config(config: WidgetConfig) -> Self {
        Self {
            config,
            options: Arc::new(DefaultOptions::default()),
        }
    }

    /// Replaces the option builders.
    #[must_use]
    pub fn with_options_provider(mut self, provider: Arc<dyn OptionsProvider>) -> Self {
        self.options = provider;
        self
    }

    /// Returns the configured pattern options with the request's date options
    /// merged under `date` and `time` switched off.
    pub fn date_pattern_options(&self, request: &WidgetRequest) -> PatternOptions {
        let mut options = self.config.pattern_options().clone();
        let date = options
            .get("date")
            .cloned()
            .unwrap_or_else(|| Value::Object(PatternOptions::new()));
        let merged = dict_merge(&date, &Value::Object(self.options.date_options(request)));
        options.insert("date".to_string(), merged);
        options.insert("time".to_string(), Value::Bool(false));
        options
    }

    pub(crate) fn options_provider(&self) -> &dyn OptionsProvider {
        self.options.as_ref()
    }
}

impl PatternWidget for DateWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Date
    }

    fn as_process_form(&self) -> Option<&dyn ProcessForm> {
        Some(self)
    }

    fn config(&self) -> &WidgetConfig {
        &self.config
    }

    fn base_args(
        &self,
        context: &dyn Content,
        field: &dyn Field,
        request: &WidgetRequest,
    ) -> RenderArgs {
        let mut args = RenderArgs::from_config(&self.config, BaseWidget::Input);
        args.name = field.name().to_string();
        args.value = format_date(&current_value(context, field, request));
        args.pattern_options = self.date_pattern_options(request);
        args
    }
}

impl ProcessForm for DateWidget {
    fn process_form(
        &self,
        field: &dyn Field,
        form: &QueryDict,
        empty_marker: FieldValue,
    ) -> (FieldValue, FormExtras) {
        match submitted(field, form).and_then(parse_date) {
            Some(date) => (FieldValue::Date(date), FormExtras::new()),
            None => (empty_marker, FormExtras::new()),
        }
    }
}

/// Date and time widget for date-time fields.
#[derive(Debug, Clone, Default)]
pub struct DatetimeWidget {
    date: DateWidget,
}

impl DatetimeWidget {
    /// Creates a date-time widget with a custom configuration.
    pub fn with_config(config: WidgetConfig) -> Self {
        Self {
            date: DateWidget::with_config(config),
        }
    }

    /// Replaces the option builders.
    #[must_use]
    pub fn with_options_provider(self, provider: Arc<dyn OptionsProvider>) -> Self {
        Self {
            date: self.date.with_options_provider(provider),
        }
    }

    /// Returns the date widget's options with the request's time options
    /// merged under `time`. The result's `time` entry is always a mapping.
    pub fn datetime_pattern_options(&self, request: &WidgetRequest) -> PatternOptions {
        let mut options = self.date.date_pattern_options(request);
        let time = match options.remove("time") {
            Some(Value::Bool(false)) | None => Value::Object(PatternOptions::new()),
            Some(other) => other,
        };
        let time_options = Value::Object(self.date.options_provider().time_options(request));
        let merged = match dict_merge(&time, &time_options) {
            merged @ Value::Object(_) => merged,
            _ => time_options,
        };
        options.insert("time".to_string(), merged);
        options
    }
}

impl PatternWidget for DatetimeWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Datetime
    }

    fn as_process_form(&self) -> Option<&dyn ProcessForm> {
        Some(self)
    }

    fn config(&self) -> &WidgetConfig {
        self.date.config()
    }

    fn base_args(
        &self,
        context: &dyn Content,
        field: &dyn Field,
        request: &WidgetRequest,
    ) -> RenderArgs {
        let mut args = RenderArgs::from_config(self.config(), BaseWidget::Input);
        args.name = field.name().to_string();
        args.value = format_datetime(&current_value(context, field, request));
        args.pattern_options = self.datetime_pattern_options(request);
        args
    }
}

impl ProcessForm for DatetimeWidget {
    fn process_form(
        &self,
        field: &dyn Field,
        form: &QueryDict,
        empty_marker: FieldValue,
    ) -> (FieldValue, FormExtras) {
        match submitted(field, form).and_then(parse_datetime) {
            Some(dt) => (FieldValue::DateTime(dt), FormExtras::new()),
            None => (empty_marker, FormExtras::new()),
        }
    }
}
