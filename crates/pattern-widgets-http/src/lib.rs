//! # pattern-widgets-http
//!
//! The request side of a widget render: submitted form data as a
//! [`QueryDict`] and the [`WidgetRequest`] that carries it together with the
//! language the option builders translate into.

pub mod querydict;
pub mod request;

pub use querydict::QueryDict;
pub use request::{WidgetRequest, WidgetRequestBuilder};
