//! Utility types and functions for pattern-widgets.
//!
//! This module provides:
//! - [`MultiValueDict`]: A dictionary that can hold multiple values per key.
//! - [`dict_merge`]: Recursive merge of JSON option mappings.

mod merge;
mod multi_value_dict;

pub use merge::{dict_merge, merge_options, PatternOptions};
pub use multi_value_dict::MultiValueDict;
