//! # pattern-widgets
//!
//! Form widget adapters that render content fields through client-side
//! patterns and parse submitted values back into typed field values.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `pattern-widgets` for everything, or on the individual
//! crates for finer-grained control.

/// Errors, settings, logging, and translations.
pub use pattern_widgets_core as core;

/// Form data and request context.
#[cfg(feature = "http")]
pub use pattern_widgets_http as http;

/// Field values, pattern widgets, rendering, and the widget registry.
#[cfg(feature = "forms")]
pub use pattern_widgets_forms as forms;

// Third-party re-exports.
pub use chrono;
pub use serde;
pub use serde_json;
pub use tracing;
pub use tracing_subscriber;
