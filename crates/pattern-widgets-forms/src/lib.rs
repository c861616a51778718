//! # pattern-widgets-forms
//!
//! Widget adapters that render content fields through client-side patterns
//! (`pickadate`, `select2`) and parse the submitted strings back into typed
//! values.
//!
//! ## Modules
//!
//! - [`value`] - Field values and their canonical string forms
//! - [`field`] - Content objects, field descriptors, and vocabularies
//! - [`options`] - Request-derived date and time picker options
//! - [`widgets`] - The `PatternWidget` and `ProcessForm` traits, widget configuration
//! - [`dates`] - Date and date-time widgets
//! - [`select`] - Selection widget
//! - [`render`] - HTML renderer
//! - [`registry`] - Widget registrations and lookup by field type

pub mod dates;
pub mod field;
pub mod options;
pub mod registry;
pub mod render;
pub mod select;
pub mod value;
pub mod widgets;

pub use dates::{DateWidget, DatetimeWidget};
pub use field::{Content, Field, FieldDef, Vocabulary, VocabularySource};
pub use options::{DefaultOptions, OptionsProvider};
pub use registry::{default_registry, WidgetRegistration, WidgetRegistry};
pub use render::{HtmlRenderer, Renderer};
pub use select::SelectWidget;
pub use value::{FieldValue, FormExtras};
pub use widgets::{
    create_widget, BaseWidget, PatternWidget, ProcessForm, RenderArgs, WidgetConfig, WidgetKind,
};
