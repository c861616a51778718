//! The request a widget is rendered or processed within.
//!
//! A [`WidgetRequest`] is read-only and request-scoped: it carries the
//! submitted form values (query string and urlencoded body combined) and the
//! language that picker labels are translated into.

use pattern_widgets_core::SETTINGS;

use crate::querydict::QueryDict;

/// Submitted values plus locale for a single request.
///
/// # Examples
///
/// ```
/// use pattern_widgets_http::WidgetRequest;
///
/// let request = WidgetRequest::builder()
///     .body("start=2024-01-15")
///     .accept_language("de-DE,de;q=0.9,en;q=0.8")
///     .build();
/// assert_eq!(request.get("start"), Some("2024-01-15"));
/// assert_eq!(request.language(), "de-de");
/// ```
#[derive(Debug, Clone)]
pub struct WidgetRequest {
    form: QueryDict,
    language: String,
}

impl Default for WidgetRequest {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WidgetRequest {
    /// Returns a builder for constructing a request.
    pub fn builder() -> WidgetRequestBuilder {
        WidgetRequestBuilder::default()
    }

    /// Creates a request around already-parsed form data, using the
    /// configured default language.
    pub fn new(form: QueryDict) -> Self {
        Self::builder().form(form).build()
    }

    /// Returns the last submitted value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.form.get(name)
    }

    /// Returns every submitted value for `name`.
    pub fn get_list(&self, name: &str) -> Option<&Vec<String>> {
        self.form.get_list(name)
    }

    /// Returns the combined form data.
    pub const fn form(&self) -> &QueryDict {
        &self.form
    }

    /// Returns the normalized language code (lowercase, `-` separated).
    pub fn language(&self) -> &str {
        &self.language
    }
}

/// Builder for [`WidgetRequest`].
#[derive(Debug, Default)]
pub struct WidgetRequestBuilder {
    query_string: String,
    body: String,
    form: Option<QueryDict>,
    language: Option<String>,
}

impl WidgetRequestBuilder {
    /// Sets the query string (without leading `?`).
    #[must_use]
    pub fn query_string(mut self, qs: &str) -> Self {
        self.query_string = qs.to_string();
        self
    }

    /// Sets an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// Uses pre-parsed form data instead of a body.
    #[must_use]
    pub fn form(mut self, form: QueryDict) -> Self {
        self.form = Some(form);
        self
    }

    /// Sets the language explicitly.
    #[must_use]
    pub fn language(mut self, language: &str) -> Self {
        self.language = Some(normalize_language(language));
        self
    }

    /// Picks the preferred language from an `Accept-Language` header value.
    ///
    /// The entry with the highest quality wins; ties keep header order.
    /// Wildcards and empty headers leave the language unset.
    #[must_use]
    pub fn accept_language(mut self, header: &str) -> Self {
        if let Some(lang) = preferred_language(header) {
            self.language = Some(lang);
        }
        self
    }

    /// Builds the [`WidgetRequest`]. Body values come after query string
    /// values, so [`WidgetRequest::get`] prefers them.
    pub fn build(self) -> WidgetRequest {
        let body = self.form.unwrap_or_else(|| QueryDict::parse(&self.body));
        let form = QueryDict::parse(&self.query_string).merged_with(&body);
        let language = self.language.unwrap_or_else(|| {
            normalize_language(&SETTINGS.get_or_default().language_code)
        });
        WidgetRequest { form, language }
    }
}

fn normalize_language(language: &str) -> String {
    language.trim().to_lowercase().replace('_', "-")
}

fn preferred_language(header: &str) -> Option<String> {
    let mut best: Option<(f32, String)> = None;
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let tag = parts.next().unwrap_or_default().trim();
        if tag.is_empty() || tag == "*" {
            continue;
        }
        let quality = parts
            .find_map(|p| p.trim().strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);
        if best.as_ref().map_or(true, |(q, _)| quality > *q) {
            best = Some((quality, normalize_language(tag)));
        }
    }
    best.map(|(_, lang)| lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_merges_query_and_body() {
        let request = WidgetRequest::builder()
            .query_string("a=1&b=query")
            .body("b=body")
            .build();
        assert_eq!(request.get("a"), Some("1"));
        assert_eq!(request.get("b"), Some("body"));
        assert_eq!(request.get_list("b").map(Vec::len), Some(2));
    }

    #[test]
    fn test_default_language_from_settings() {
        let request = WidgetRequest::default();
        assert_eq!(
            request.language(),
            normalize_language(&SETTINGS.get_or_default().language_code)
        );
        assert!(request.form().is_empty());
    }

    #[test]
    fn test_explicit_language_is_normalized() {
        let request = WidgetRequest::builder().language("pt_BR").build();
        assert_eq!(request.language(), "pt-br");
    }

    #[test]
    fn test_accept_language_quality() {
        assert_eq!(
            preferred_language("en;q=0.5, fr;q=0.9, de;q=0.1"),
            Some("fr".to_string())
        );
        assert_eq!(preferred_language("nl, en;q=0.8"), Some("nl".to_string()));
        assert_eq!(preferred_language("*"), None);
        assert_eq!(preferred_language(""), None);
    }

    #[test]
    fn test_new_wraps_form() {
        let request = WidgetRequest::new(QueryDict::parse("x=1"));
        assert_eq!(request.get("x"), Some("1"));
    }
}
