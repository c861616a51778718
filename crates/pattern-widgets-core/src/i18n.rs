//! Translation lookup for the labels handed to client-side pickers.
//!
//! Widgets render inside a request that carries its own language, so lookups
//! take the language explicitly instead of reading thread-local state.
//! Regional codes fall back to their base language (`pt-br` → `pt`), and a
//! missing translation falls back to the msgid itself.
//!
//! ```
//! use pattern_widgets_core::i18n;
//!
//! i18n::catalog::register_translations("es-doc", vec![("Today", "Hoy")]);
//! assert_eq!(i18n::gettext("es-doc", "Today"), "Hoy");
//! assert_eq!(i18n::gettext("es-doc", "Clear"), "Clear");
//! ```

pub mod catalog;

/// Returns the languages to try for `language`, most specific first.
fn candidates(language: &str) -> Vec<String> {
    let mut current = language.trim().to_lowercase().replace('_', "-");
    let mut langs = vec![current.clone()];
    while let Some((base, _)) = current.rsplit_once('-') {
        current = base.to_string();
        langs.push(current.clone());
    }
    langs
}

/// Translates `msgid` into `language`.
pub fn gettext(language: &str, msgid: &str) -> String {
    candidates(language)
        .iter()
        .find_map(|lang| catalog::translate(lang, msgid))
        .unwrap_or_else(|| msgid.to_string())
}

/// Translates `msgid` within a disambiguating `context` (e.g. `"month"`).
pub fn pgettext(language: &str, context: &str, msgid: &str) -> String {
    candidates(language)
        .iter()
        .find_map(|lang| catalog::translate_context(lang, context, msgid))
        .unwrap_or_else(|| msgid.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gettext_fallback_to_msgid() {
        assert_eq!(gettext("xx-unknown", "Enter date..."), "Enter date...");
    }

    #[test]
    fn test_gettext_regional_falls_back_to_base() {
        catalog::register_translations("i18n-test", vec![("Clear", "Limpar")]);
        assert_eq!(gettext("i18n-test-br", "Clear"), "Limpar");
        assert_eq!(gettext("I18N_TEST", "Clear"), "Limpar");
    }

    #[test]
    fn test_regional_translation_wins() {
        catalog::register_translations("i18nreg", vec![("Today", "base")]);
        catalog::register_translations("i18nreg-ca", vec![("Today", "regional")]);
        assert_eq!(gettext("i18nreg-ca", "Today"), "regional");
        assert_eq!(gettext("i18nreg-us", "Today"), "base");
    }

    #[test]
    fn test_pgettext() {
        catalog::register_context_translations("i18nctx", vec![("month", "May", "Mai")]);
        assert_eq!(pgettext("i18nctx", "month", "May"), "Mai");
        assert_eq!(pgettext("i18nctx", "weekday", "May"), "May");
    }
}
