//! Widget adapters for client-side patterns.
//!
//! A pattern widget turns a field's stored value into the arguments a base
//! HTML widget needs (pattern name, pattern options, field name, formatted
//! value), hands them to a [`Renderer`], and, for widgets that support it,
//! parses the submitted string back into a typed value.
//!
//! Every widget is immutable configuration: nothing computed for one request
//! is kept on the widget, so one instance can serve concurrent requests.

use std::fmt;

use pattern_widgets_core::logging::render_span;
use pattern_widgets_core::{PatternOptions, WidgetError, WidgetResult};
use pattern_widgets_http::{QueryDict, WidgetRequest};

use crate::dates::{DateWidget, DatetimeWidget};
use crate::field::{Content, Field};
use crate::render::{HtmlRenderer, Renderer};
use crate::select::SelectWidget;
use crate::value::{FieldValue, FormExtras};

/// Enumerates the built-in widget adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// Date-only picker.
    Date,
    /// Date and time picker.
    Datetime,
    /// Single- or multi-select over a vocabulary.
    Select,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Date => "DateWidget",
            Self::Datetime => "DatetimeWidget",
            Self::Select => "SelectWidget",
        };
        write!(f, "{name}")
    }
}

/// The HTML element a pattern is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseWidget {
    /// `<input type="text">`.
    Input,
    /// `<select>`.
    Select,
}

/// Immutable per-widget configuration: which pattern to invoke and its
/// default options.
///
/// # Examples
///
/// ```
/// use pattern_widgets_forms::widgets::WidgetConfig;
///
/// assert!(WidgetConfig::new("pickadate").is_ok());
/// assert!(WidgetConfig::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pattern: String,
    pattern_options: PatternOptions,
}

impl WidgetConfig {
    /// Creates a configuration for `pattern` with no default options.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ImproperlyConfigured`] if `pattern` is blank.
    pub fn new(pattern: impl Into<String>) -> WidgetResult<Self> {
        let pattern = pattern.into();
        if pattern.trim().is_empty() {
            return Err(WidgetError::ImproperlyConfigured(
                "'pattern' option is not provided.".to_string(),
            ));
        }
        Ok(Self {
            pattern,
            pattern_options: PatternOptions::new(),
        })
    }

    /// Configuration for the built-in widgets, whose pattern names are constants.
    pub(crate) fn builtin(pattern: &'static str) -> Self {
        Self {
            pattern: pattern.to_string(),
            pattern_options: PatternOptions::new(),
        }
    }

    /// Replaces the default pattern options.
    #[must_use]
    pub fn with_options(mut self, options: PatternOptions) -> Self {
        self.pattern_options = options;
        self
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub const fn pattern_options(&self) -> &PatternOptions {
        &self.pattern_options
    }
}

/// Everything a [`Renderer`] needs to produce the widget's HTML.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArgs {
    /// Element the pattern attaches to.
    pub base: BaseWidget,
    /// Client-side pattern name, e.g. `pickadate`.
    pub pattern: String,
    /// Options serialized into the `data-pat-*` attribute.
    pub pattern_options: PatternOptions,
    /// Form field name.
    pub name: String,
    /// Formatted current value.
    pub value: FieldValue,
    /// Whether several choices may be selected. Selection widgets only.
    pub multiple: Option<bool>,
    /// Available `(key, label)` choices. Selection widgets only.
    pub items: Option<Vec<(String, String)>>,
}

impl RenderArgs {
    /// Starts render arguments from a widget configuration. The options are
    /// copied, so later merging never touches the configuration.
    pub fn from_config(config: &WidgetConfig, base: BaseWidget) -> Self {
        Self {
            base,
            pattern: config.pattern.clone(),
            pattern_options: config.pattern_options.clone(),
            name: String::new(),
            value: FieldValue::Empty,
            multiple: None,
            items: None,
        }
    }
}

/// Returns the submitted value for the field if the request carries one,
/// otherwise the stored value.
pub fn current_value(context: &dyn Content, field: &dyn Field, request: &WidgetRequest) -> FieldValue {
    request
        .get_list(field.name())
        .map_or_else(|| field.accessor(context), |values| FieldValue::from_submitted(values))
}

/// A widget adapter that renders a field through a client-side pattern.
pub trait PatternWidget: Send + Sync + fmt::Debug {
    /// Returns the widget kind.
    fn kind(&self) -> WidgetKind;

    /// Returns the widget's configuration.
    fn config(&self) -> &WidgetConfig;

    /// Computes the render arguments for `field` on `context`.
    ///
    /// Pure: neither the inputs nor the widget are modified.
    fn base_args(&self, context: &dyn Content, field: &dyn Field, request: &WidgetRequest)
        -> RenderArgs;

    /// Returns the widget's submission parser, if it has one.
    ///
    /// Lets hosts holding a `Box<dyn PatternWidget>` parse what they rendered.
    fn as_process_form(&self) -> Option<&dyn ProcessForm> {
        None
    }

    /// Returns what the field shows in view mode: its stored value.
    fn view(&self, context: &dyn Content, field: &dyn Field, _request: &WidgetRequest) -> FieldValue {
        field.accessor(context)
    }

    /// Renders the edit-mode HTML through `renderer`. Renderer errors pass
    /// through unchanged.
    fn render_with(
        &self,
        renderer: &dyn Renderer,
        context: &dyn Content,
        field: &dyn Field,
        request: &WidgetRequest,
    ) -> WidgetResult<String> {
        let args = self.base_args(context, field, request);
        let span = render_span(&args.pattern, &args.name);
        let _guard = span.enter();
        tracing::debug!(widget = %self.kind(), "rendering pattern widget");
        renderer.render(&args)
    }

    /// Renders the edit-mode HTML with the default [`HtmlRenderer`].
    fn render(
        &self,
        context: &dyn Content,
        field: &dyn Field,
        request: &WidgetRequest,
    ) -> WidgetResult<String> {
        self.render_with(&HtmlRenderer, context, field, request)
    }
}

/// Parses a submitted form value back into a field value.
///
/// Only widgets with a canonical string form implement this; the select
/// widget leaves submissions to the host's default field handling.
pub trait ProcessForm {
    /// Reads the field's key from `form` and parses it.
    ///
    /// Never fails: absent, empty, or malformed input returns `empty_marker`
    /// with empty extras.
    fn process_form(
        &self,
        field: &dyn Field,
        form: &QueryDict,
        empty_marker: FieldValue,
    ) -> (FieldValue, FormExtras);
}

/// Creates a boxed widget with default configuration for `kind`.
pub fn create_widget(kind: WidgetKind) -> Box<dyn PatternWidget> {
    match kind {
        WidgetKind::Date => Box::new(DateWidget::default()),
        WidgetKind::Datetime => Box::new(DatetimeWidget::default()),
        WidgetKind::Select => Box::new(SelectWidget::default()),
    }
}
