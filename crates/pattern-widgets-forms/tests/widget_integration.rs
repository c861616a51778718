//! Integration tests for the edit → render → submit → parse pipeline.
//!
//! These tests drive the widgets the way a host form does:
//! 1. Look a widget up in the registry for a field type
//! 2. Render it for a content object and request
//! 3. Feed the rendered value back as a form submission and parse it

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use pattern_widgets_core::i18n::catalog;
use pattern_widgets_core::{PatternOptions, WidgetError, WidgetResult};
use pattern_widgets_forms::{
    default_registry, DateWidget, DatetimeWidget, FieldDef, FieldValue, OptionsProvider,
    PatternWidget, ProcessForm, RenderArgs, Renderer, SelectWidget, Vocabulary, WidgetConfig,
    WidgetKind,
};
use pattern_widgets_http::{QueryDict, WidgetRequest};
use serde_json::json;

// ============================================================================
// Shared helpers
// ============================================================================

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ymd_hm(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    ymd(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// An event with a start date, an end date-time, and a category.
fn event() -> HashMap<String, FieldValue> {
    let mut content = HashMap::new();
    content.insert("start".to_string(), FieldValue::from(ymd(2021, 3, 7)));
    content.insert("end".to_string(), FieldValue::from(ymd_hm(2021, 3, 8, 17, 45)));
    content.insert("category".to_string(), FieldValue::from("talk"));
    content
}

fn category_field() -> FieldDef {
    FieldDef::new("category", "SelectField").with_vocabulary(Vocabulary::new([
        ("talk", "Talk"),
        ("workshop", "Workshop"),
        ("social", "Social <evening>"),
    ]))
}

/// Pulls the `value="..."` attribute out of rendered input HTML.
fn rendered_value(html: &str) -> String {
    let start = html.find("value=\"").map(|i| i + 7).unwrap();
    let end = html[start..].find('"').unwrap() + start;
    html[start..end].to_string()
}

#[derive(Debug)]
struct IsoOptions;

impl OptionsProvider for IsoOptions {
    fn date_options(&self, request: &WidgetRequest) -> PatternOptions {
        json!({"format": "yyyy-mm-dd", "lang": request.language()})
            .as_object()
            .cloned()
            .unwrap()
    }

    fn time_options(&self, _request: &WidgetRequest) -> PatternOptions {
        json!({"format": "HH:i", "interval": 15}).as_object().cloned().unwrap()
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    fn render(&self, _args: &RenderArgs) -> WidgetResult<String> {
        Err(WidgetError::RenderError("template missing".to_string()))
    }
}

// ============================================================================
// Registry lookup
// ============================================================================

#[test]
fn test_registry_offers_widgets_per_field_type() {
    let registry = default_registry();
    let kinds: Vec<WidgetKind> = registry
        .for_field_type("DateTimeField")
        .iter()
        .map(|r| r.kind)
        .collect();
    assert_eq!(kinds, vec![WidgetKind::Date, WidgetKind::Datetime]);

    let select = registry.create("SelectWidget").unwrap();
    let html = select
        .render(&event(), &category_field(), &WidgetRequest::default())
        .unwrap();
    assert!(html.contains(r#"<option value="talk" selected>Talk</option>"#));
    assert!(html.contains("Social &lt;evening&gt;"));
}

#[test]
fn test_registry_widget_parses_what_it_rendered() {
    let widget = default_registry().create("DatetimeWidget").unwrap();
    let field = FieldDef::new("end", "DateTimeField");

    let html = widget
        .render(&event(), &field, &WidgetRequest::default())
        .unwrap();
    let value = rendered_value(&html);
    let form = QueryDict::from_pairs([("end", value.as_str())]);

    let parser = widget.as_process_form().unwrap();
    let (parsed, extras) = parser.process_form(&field, &form, FieldValue::Empty);
    assert_eq!(parsed, FieldValue::DateTime(ymd_hm(2021, 3, 8, 17, 45)));
    assert!(extras.is_empty());

    let select = default_registry().create("SelectWidget").unwrap();
    assert!(select.as_process_form().is_none());
}

// ============================================================================
// Date round trip
// ============================================================================

#[test]
fn test_date_render_then_submit_round_trips() {
    let widget = DateWidget::default();
    let field = FieldDef::new("start", "DateTimeField");

    let html = widget
        .render(&event(), &field, &WidgetRequest::default())
        .unwrap();
    assert!(html.starts_with(r#"<input type="text" class="pat-pickadate""#));
    let value = rendered_value(&html);
    assert_eq!(value, "2021-03-07");

    let form = QueryDict::from_pairs([("start", value.as_str())]);
    let (parsed, extras) = widget.process_form(&field, &form, FieldValue::Empty);
    assert_eq!(parsed, FieldValue::Date(ymd(2021, 3, 7)));
    assert!(extras.is_empty());
}

#[test]
fn test_datetime_render_then_submit_round_trips() {
    let widget = DatetimeWidget::default();
    let field = FieldDef::new("end", "DateTimeField");

    let html = widget
        .render(&event(), &field, &WidgetRequest::default())
        .unwrap();
    let value = rendered_value(&html);
    assert_eq!(value, "2021-03-08 17:45");

    let form = QueryDict::parse(&format!("end={}", value.replace(' ', "+")));
    let (parsed, _) = widget.process_form(&field, &form, FieldValue::Empty);
    assert_eq!(parsed, FieldValue::DateTime(ymd_hm(2021, 3, 8, 17, 45)));
}

#[test]
fn test_datetime_of_date_renders_midnight() {
    let widget = DatetimeWidget::default();
    let field = FieldDef::new("start", "DateTimeField");
    let html = widget
        .render(&event(), &field, &WidgetRequest::default())
        .unwrap();
    assert_eq!(rendered_value(&html), "2021-03-07 00:00");
}

// ============================================================================
// Re-rendering a rejected submission
// ============================================================================

#[test]
fn test_invalid_submission_is_rerendered_verbatim_and_parses_to_marker() {
    let widget = DateWidget::default();
    let field = FieldDef::new("start", "DateTimeField");
    let request = WidgetRequest::builder().body("start=2020-02-30").build();

    let html = widget.render(&event(), &field, &request).unwrap();
    assert_eq!(rendered_value(&html), "2020-02-30");

    let marker = FieldValue::from("__missing__");
    let (parsed, extras) = widget.process_form(&field, request.form(), marker.clone());
    assert_eq!(parsed, marker);
    assert!(extras.is_empty());
}

#[test]
fn test_date_only_submission_to_datetime_widget_parses_to_marker() {
    let widget = DatetimeWidget::default();
    let field = FieldDef::new("end", "DateTimeField");
    let form = QueryDict::from_pairs([("end", "2020-01-15")]);
    let (parsed, _) = widget.process_form(&field, &form, FieldValue::Empty);
    assert_eq!(parsed, FieldValue::Empty);
}

// ============================================================================
// Options and localization
// ============================================================================

#[test]
fn test_pattern_options_are_serialized_into_markup() {
    let defaults = json!({"date": {"firstDay": 1}}).as_object().cloned().unwrap();
    let widget = DatetimeWidget::with_config(
        WidgetConfig::new("pickadate").unwrap().with_options(defaults),
    )
    .with_options_provider(Arc::new(IsoOptions));
    let field = FieldDef::new("end", "DateTimeField");
    let request = WidgetRequest::builder().language("nl").build();

    let args = widget.base_args(&event(), &field, &request);
    assert_eq!(
        serde_json::Value::Object(args.pattern_options.clone()),
        json!({
            "date": {"firstDay": 1, "format": "yyyy-mm-dd", "lang": "nl"},
            "time": {"format": "HH:i", "interval": 15},
        })
    );

    let html = widget.render(&event(), &field, &request).unwrap();
    assert!(html.contains("data-pat-pickadate=\"{"));
    assert!(html.contains("&quot;firstDay&quot;:1"));
    // Rendering twice yields the same markup: nothing leaks between requests.
    assert_eq!(html, widget.render(&event(), &field, &request).unwrap());
}

#[test]
fn test_default_options_follow_request_language() {
    catalog::register_translations("it-integ", vec![("Today", "Oggi"), ("Clear", "Cancella")]);
    catalog::register_context_translations("it-integ", vec![("month", "January", "gennaio")]);

    let widget = DateWidget::default();
    let field = FieldDef::new("start", "DateTimeField");
    let request = WidgetRequest::builder()
        .accept_language("it-integ;q=0.9, en;q=0.1")
        .build();

    let args = widget.base_args(&event(), &field, &request);
    assert_eq!(args.pattern_options["date"]["today"], "Oggi");
    assert_eq!(args.pattern_options["date"]["clear"], "Cancella");
    assert_eq!(args.pattern_options["date"]["monthsFull"][0], "gennaio");
    assert_eq!(args.pattern_options["time"], false);
}

// ============================================================================
// Rendering failures and view mode
// ============================================================================

#[test]
fn test_renderer_errors_pass_through() {
    let widget = SelectWidget::new(true);
    let err = widget
        .render_with(&FailingRenderer, &event(), &category_field(), &WidgetRequest::default())
        .unwrap_err();
    assert!(matches!(err, WidgetError::RenderError(ref msg) if msg == "template missing"));
}

#[test]
fn test_view_returns_stored_value_unformatted() {
    let content = event();
    let field = FieldDef::new("end", "DateTimeField");
    let request = WidgetRequest::builder().body("end=garbage").build();
    assert_eq!(
        DatetimeWidget::default().view(&content, &field, &request),
        content["end"]
    );
}

#[test]
fn test_missing_pattern_is_rejected_at_construction() {
    let err = WidgetConfig::new("").unwrap_err();
    assert!(err.is_configuration());
}
