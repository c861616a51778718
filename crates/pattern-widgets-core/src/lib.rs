//! # pattern-widgets-core
//!
//! Core types, settings, and error types for the pattern-widgets workspace.
//! This crate has no dependency on the other workspace crates and provides the
//! foundation they build on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`utils`] - Utility types (`MultiValueDict`, `dict_merge`)
//! - [`settings`] - Widget settings and global configuration
//! - [`settings_loader`] - Loading settings from TOML, JSON, and the environment
//! - [`i18n`] - Translation catalog used by the option builders
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod i18n;
pub mod logging;
pub mod settings;
pub mod settings_loader;
pub mod utils;

// Re-export the most commonly used types at the crate root.
pub use error::{WidgetError, WidgetResult};
pub use settings::{Settings, SETTINGS};
pub use utils::{dict_merge, PatternOptions};
