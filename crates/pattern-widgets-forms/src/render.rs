//! Renderers turn [`RenderArgs`] into HTML.

use std::fmt::Write;

use pattern_widgets_core::{PatternOptions, WidgetError, WidgetResult};

use crate::widgets::{BaseWidget, RenderArgs};

/// Produces the edit-mode HTML for a widget.
pub trait Renderer: Send + Sync {
    /// Renders `args`.
    ///
    /// # Errors
    ///
    /// Implementations return whatever error prevented rendering; widgets
    /// pass it through unchanged.
    fn render(&self, args: &RenderArgs) -> WidgetResult<String>;
}

/// Renders plain `<input>` and `<select>` elements carrying `pat-*` markup.
///
/// # Examples
///
/// ```
/// use pattern_widgets_forms::render::{HtmlRenderer, Renderer};
/// use pattern_widgets_forms::widgets::{BaseWidget, RenderArgs, WidgetConfig};
///
/// let config = WidgetConfig::new("pickadate").unwrap();
/// let mut args = RenderArgs::from_config(&config, BaseWidget::Input);
/// args.name = "start".to_string();
/// let html = HtmlRenderer.render(&args).unwrap();
/// assert_eq!(
///     html,
///     r#"<input type="text" class="pat-pickadate" data-pat-pickadate="{}" name="start" value="" />"#
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

/// Escapes HTML special characters in a string.
///
/// Replaces `&`, `<`, `>`, `"`, and `'` with their HTML entity equivalents.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn options_json(options: &PatternOptions) -> WidgetResult<String> {
    serde_json::to_string(options).map_err(|e| WidgetError::SerializationError(e.to_string()))
}

impl Renderer for HtmlRenderer {
    fn render(&self, args: &RenderArgs) -> WidgetResult<String> {
        let pattern = escape_html(&args.pattern);
        let options = escape_html(&options_json(&args.pattern_options)?);
        let name = escape_html(&args.name);
        let tokens = args.value.to_tokens();

        let html = match args.base {
            BaseWidget::Input => {
                let value = escape_html(&tokens.join(","));
                format!(
                    r#"<input type="text" class="pat-{pattern}" data-pat-{pattern}="{options}" name="{name}" value="{value}" />"#
                )
            }
            BaseWidget::Select => {
                let multiple = if args.multiple.unwrap_or(false) {
                    " multiple"
                } else {
                    ""
                };
                let mut html = format!(
                    r#"<select class="pat-{pattern}" data-pat-{pattern}="{options}" name="{name}"{multiple}>"#
                );
                for (key, label) in args.items.iter().flatten() {
                    let selected = if tokens.contains(key) { " selected" } else { "" };
                    let _ = write!(
                        html,
                        r#"<option value="{}"{selected}>{}</option>"#,
                        escape_html(key),
                        escape_html(label)
                    );
                }
                html.push_str("</select>");
                html
            }
        };
        Ok(html)
    }
}
