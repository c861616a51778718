//! Translation catalog for loading and looking up translations.
//!
//! The catalog stores translations in a global, thread-safe registry organized
//! by language code. Translations can be loaded from JSON or registered
//! programmatically.
//!
//! ## JSON Format
//!
//! ```json
//! {
//!   "messages": {
//!     "Today": "Heute",
//!     "Clear": "Leeren"
//!   },
//!   "contexts": {
//!     "month\u0004March": "März"
//!   }
//! }
//! ```

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use crate::error::{WidgetError, WidgetResult};

/// A translation catalog for a single language.
#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    /// Simple message translations: msgid -> translated string.
    messages: HashMap<String, String>,
    /// Context translations: "context\x04msgid" -> translated string.
    contexts: HashMap<String, String>,
}

/// The global translation catalog registry, keyed by language code.
fn global_catalogs() -> &'static RwLock<HashMap<String, TranslationCatalog>> {
    static CATALOGS: OnceLock<RwLock<HashMap<String, TranslationCatalog>>> = OnceLock::new();
    CATALOGS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn with_catalog<F, R>(language: &str, f: F) -> Option<R>
where
    F: FnOnce(&TranslationCatalog) -> Option<R>,
{
    let catalogs = global_catalogs().read().expect("catalog lock poisoned");
    catalogs.get(language).and_then(f)
}

#[allow(clippy::significant_drop_tightening)]
fn with_catalog_mut<F>(language: &str, f: F)
where
    F: FnOnce(&mut TranslationCatalog),
{
    let mut catalogs = global_catalogs().write().expect("catalog lock poisoned");
    let catalog = catalogs.entry(language.to_string()).or_default();
    f(catalog);
}

fn context_key(context: &str, msgid: &str) -> String {
    format!("{context}\x04{msgid}")
}

// ── Registration API ─────────────────────────────────────────────────────

/// Registers simple message translations for a language.
///
/// Each entry is a `(msgid, translated)` pair. Existing entries are
/// overwritten.
///
/// # Examples
///
/// ```
/// use pattern_widgets_core::i18n::catalog;
///
/// catalog::register_translations("fr", vec![
///     ("Today", "Aujourd'hui"),
///     ("Clear", "Effacer"),
/// ]);
/// ```
pub fn register_translations(language: &str, entries: Vec<(&str, &str)>) {
    with_catalog_mut(language, |catalog| {
        for (msgid, translated) in entries {
            catalog
                .messages
                .insert(msgid.to_string(), translated.to_string());
        }
    });
}

/// Registers context-specific translations for a language.
///
/// Each entry is `(context, msgid, translated)`. The option builders use the
/// `"month"`, `"month_abbr"`, `"weekday"`, and `"weekday_abbr"` contexts.
pub fn register_context_translations(language: &str, entries: Vec<(&str, &str, &str)>) {
    with_catalog_mut(language, |catalog| {
        for (context, msgid, translated) in entries {
            catalog
                .contexts
                .insert(context_key(context, msgid), translated.to_string());
        }
    });
}

/// Loads translations from a JSON string. Both top-level keys are optional.
///
/// # Errors
///
/// Returns [`WidgetError::SerializationError`] if the JSON is invalid.
pub fn load_from_json(language: &str, json_str: &str) -> WidgetResult<()> {
    let value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| WidgetError::SerializationError(format!("Invalid catalog JSON: {e}")))?;

    with_catalog_mut(language, |catalog| {
        if let Some(messages) = value.get("messages").and_then(|v| v.as_object()) {
            for (msgid, translated) in messages {
                if let Some(t) = translated.as_str() {
                    catalog.messages.insert(msgid.clone(), t.to_string());
                }
            }
        }

        if let Some(contexts) = value.get("contexts").and_then(|v| v.as_object()) {
            for (key, translated) in contexts {
                if let Some(t) = translated.as_str() {
                    catalog.contexts.insert(key.clone(), t.to_string());
                }
            }
        }
    });

    Ok(())
}

// ── Lookup API ───────────────────────────────────────────────────────────

/// Looks up a simple translation in the catalog.
pub fn translate(language: &str, msgid: &str) -> Option<String> {
    with_catalog(language, |catalog| catalog.messages.get(msgid).cloned())
}

/// Looks up a context-specific translation in the catalog.
pub fn translate_context(language: &str, context: &str, msgid: &str) -> Option<String> {
    let key = context_key(context, msgid);
    with_catalog(language, |catalog| catalog.contexts.get(&key).cloned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_translate() {
        register_translations("cat-de", vec![("Today", "Heute")]);
        assert_eq!(translate("cat-de", "Today"), Some("Heute".to_string()));
        assert_eq!(translate("cat-de", "Missing"), None);
    }

    #[test]
    fn test_context_translation() {
        register_context_translations("cat-ctx", vec![("month", "March", "März")]);
        assert_eq!(
            translate_context("cat-ctx", "month", "March"),
            Some("März".to_string())
        );
        assert_eq!(translate_context("cat-ctx", "weekday", "March"), None);
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"{
            "messages": {"Clear": "Wissen"},
            "contexts": {"weekday\u0004Monday": "maandag"}
        }"#;
        load_from_json("cat-nl", json).unwrap();
        assert_eq!(translate("cat-nl", "Clear"), Some("Wissen".to_string()));
        assert_eq!(
            translate_context("cat-nl", "weekday", "Monday"),
            Some("maandag".to_string())
        );
    }

    #[test]
    fn test_load_from_json_invalid() {
        let result = load_from_json("cat-bad", "{not json");
        assert!(matches!(result, Err(WidgetError::SerializationError(_))));
    }
}
