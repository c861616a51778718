//! Core error types for the pattern-widgets workspace.
//!
//! [`WidgetError`] covers the failures a widget adapter can surface to its
//! caller: misconfiguration, renderer failures, and serialization problems.
//! Malformed user submissions are deliberately absent here; they degrade to
//! the caller's empty marker instead of becoming errors.

use thiserror::Error;

/// The primary error type for pattern-widgets.
///
/// # Examples
///
/// ```
/// use pattern_widgets_core::error::WidgetError;
///
/// let err = WidgetError::ImproperlyConfigured("'pattern' option is not provided.".into());
/// assert!(err.is_configuration());
/// ```
#[derive(Error, Debug)]
pub enum WidgetError {
    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A widget was constructed without the options it requires.
    #[error("Improperly configured: {0}")]
    ImproperlyConfigured(String),

    // ── Rendering ────────────────────────────────────────────────────

    /// The renderer failed to produce HTML.
    #[error("Render error: {0}")]
    RenderError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl WidgetError {
    /// Returns `true` for errors caused by a misconfigured widget or settings
    /// file rather than by the data being rendered.
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationError(_) | Self::ImproperlyConfigured(_)
        )
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience type alias for `Result<T, WidgetError>`.
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WidgetError::ImproperlyConfigured("no pattern".into());
        assert_eq!(err.to_string(), "Improperly configured: no pattern");

        let err = WidgetError::RenderError("boom".into());
        assert_eq!(err.to_string(), "Render error: boom");
    }

    #[test]
    fn test_is_configuration() {
        assert!(WidgetError::ConfigurationError("x".into()).is_configuration());
        assert!(WidgetError::ImproperlyConfigured("x".into()).is_configuration());
        assert!(!WidgetError::RenderError("x".into()).is_configuration());
        assert!(!WidgetError::SerializationError("x".into()).is_configuration());
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let err: WidgetError = json_err.into();
        assert!(matches!(err, WidgetError::SerializationError(_)));
    }
}
