//! The values a content field holds and a widget displays.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Extra keyword data returned alongside a parsed submission. Always empty
/// for the built-in widgets; hosts may pass it on to their field setter.
pub type FormExtras = serde_json::Map<String, serde_json::Value>;

/// A value stored on (or submitted for) a content field.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pattern_widgets_forms::value::FieldValue;
///
/// let value = FieldValue::from(NaiveDate::from_ymd_opt(2021, 3, 7).unwrap());
/// assert_eq!(value.to_tokens(), vec!["2021-03-07".to_string()]);
/// assert!(FieldValue::Text(String::new()).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    /// No value stored.
    #[default]
    Empty,
    /// A calendar date.
    Date(NaiveDate),
    /// A date with a wall-clock time. Widgets work at minute precision.
    DateTime(NaiveDateTime),
    /// A scalar, usually a raw submitted string.
    Text(String),
    /// A collection of scalars, e.g. the keys of a multi-select.
    List(Vec<String>),
}

impl FieldValue {
    /// Returns `true` for values that count as "nothing entered": `Empty`, an
    /// empty string, or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Date(_) | Self::DateTime(_) => false,
        }
    }

    /// Returns the string tokens this value renders as. Dates use the
    /// canonical `YYYY-MM-DD` / `YYYY-MM-DD HH:MM` forms.
    pub fn to_tokens(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Date(date) => vec![date_string(*date)],
            Self::DateTime(dt) => vec![datetime_string(*dt)],
            Self::Text(s) => vec![s.clone()],
            Self::List(items) => items.clone(),
        }
    }

    /// Returns the text of a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Builds a value from the strings submitted under one key: a single
    /// string stays scalar, several become a list.
    pub fn from_submitted(values: &[String]) -> Self {
        match values {
            [] => Self::Empty,
            [single] => Self::Text(single.clone()),
            many => Self::List(many.to_vec()),
        }
    }
}

/// Formats a date as `{year}-{month:02}-{day:02}`. The year is not padded.
pub fn date_string(date: NaiveDate) -> String {
    format!("{}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Formats a date-time as `YYYY-MM-DD HH:MM`. Seconds are dropped.
pub fn datetime_string(dt: NaiveDateTime) -> String {
    format!(
        "{} {:02}:{:02}",
        date_string(dt.date()),
        dt.hour(),
        dt.minute()
    )
}

impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Self>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}
