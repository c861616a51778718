//! Selection widget for the `select2` pattern.

use pattern_widgets_http::WidgetRequest;

use crate::field::{Content, Field};
use crate::widgets::{current_value, BaseWidget, PatternWidget, RenderArgs, WidgetConfig, WidgetKind};

/// Single- or multi-select over a field's vocabulary.
///
/// Submissions are left to the host's default field handling, so this
/// widget does not implement [`ProcessForm`](crate::widgets::ProcessForm).
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pattern_widgets_forms::field::{FieldDef, Vocabulary};
/// use pattern_widgets_forms::select::SelectWidget;
/// use pattern_widgets_forms::value::FieldValue;
/// use pattern_widgets_forms::widgets::PatternWidget;
/// use pattern_widgets_http::WidgetRequest;
///
/// let field = FieldDef::new("color", "SelectField")
///     .with_vocabulary(Vocabulary::new([("r", "Red"), ("g", "Green")]));
/// let content: HashMap<String, FieldValue> = HashMap::new();
///
/// let args = SelectWidget::new(true).base_args(&content, &field, &WidgetRequest::default());
/// assert_eq!(args.multiple, Some(true));
/// assert_eq!(args.items.map(|items| items.len()), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct SelectWidget {
    config: WidgetConfig,
    multiple: bool,
}

impl Default for SelectWidget {
    fn default() -> Self {
        Self::new(false)
    }
}

impl SelectWidget {
    /// The pattern the built-in configuration uses.
    pub const PATTERN: &'static str = "select2";

    /// Creates a select widget with the built-in configuration.
    pub fn new(multiple: bool) -> Self {
        Self::with_config(WidgetConfig::builtin(Self::PATTERN), multiple)
    }

    /// Creates a select widget with a custom configuration.
    pub const fn with_config(config: WidgetConfig, multiple: bool) -> Self {
        Self { config, multiple }
    }

    pub const fn multiple(&self) -> bool {
        self.multiple
    }
}

impl PatternWidget for SelectWidget {
    fn kind(&self) -> WidgetKind {
        WidgetKind::Select
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
        let mut args = RenderArgs::from_config(&self.config, BaseWidget::Select);
        args.name = field.name().to_string();
        args.value = current_value(context, field, request);
        args.multiple = Some(self.multiple);
        args.items = Some(field.vocabulary(context).items().to_vec());
        args
    }
}
