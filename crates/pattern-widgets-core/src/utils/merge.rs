//! Recursive merging of pattern option mappings.

use serde_json::{Map, Value};

/// The options handed to a client-side pattern, serialized as JSON into its
/// `data-pat-*` attribute.
pub type PatternOptions = Map<String, Value>;

/// Deep-merges two JSON values without mutating either. `overrides` takes
/// precedence.
///
/// When both sides are objects, keys from `overrides` are merged recursively
/// into a copy of `base`. In every other case (including arrays and a
/// non-object `base` such as `false`) the result is a copy of `overrides`.
///
/// # Examples
///
/// ```
/// use pattern_widgets_core::dict_merge;
/// use serde_json::json;
///
/// let merged = dict_merge(&json!({"a": {"x": 1, "y": 2}}), &json!({"a": {"y": 3}}));
/// assert_eq!(merged, json!({"a": {"x": 1, "y": 3}}));
///
/// assert_eq!(dict_merge(&json!(false), &json!({"format": "h:i a"})), json!({"format": "h:i a"}));
/// ```
pub fn dict_merge(base: &Value, overrides: &Value) -> Value {
    match (base, overrides) {
        (Value::Object(base_map), Value::Object(override_map)) => {
            Value::Object(merge_options(base_map, override_map))
        }
        (_, overrides) => overrides.clone(),
    }
}

/// Deep-merges two option mappings; see [`dict_merge`].
pub fn merge_options(base: &PatternOptions, overrides: &PatternOptions) -> PatternOptions {
    let mut merged = base.clone();
    for (key, override_v) in overrides {
        let value = match merged.get(key) {
            Some(base_v) => dict_merge(base_v, override_v),
            None => override_v.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_basic() {
        let merged = dict_merge(&json!({"a": 1, "b": 2}), &json!({"b": 3, "c": 4}));
        assert_eq!(merged, json!({"a": 1, "b": 3, "c": 4}));
    }

    #[test]
    fn test_merge_nested() {
        let base = json!({"date": {"format": "d", "selectYears": 10}});
        let over = json!({"date": {"format": "yyyy"}});
        let merged = dict_merge(&base, &over);
        assert_eq!(merged["date"]["format"], "yyyy");
        assert_eq!(merged["date"]["selectYears"], 10);
    }

    #[test]
    fn test_merge_array_replaces() {
        let merged = dict_merge(&json!({"list": [1, 2, 3]}), &json!({"list": [4, 5]}));
        assert_eq!(merged["list"], json!([4, 5]));
    }

    #[test]
    fn test_merge_scalar_base_replaced_by_object() {
        let merged = dict_merge(&json!({"time": false}), &json!({"time": {"format": "H:i"}}));
        assert_eq!(merged["time"], json!({"format": "H:i"}));
    }

    #[test]
    fn test_merge_object_replaced_by_scalar() {
        let merged = dict_merge(&json!({"time": {"format": "H:i"}}), &json!({"time": false}));
        assert_eq!(merged["time"], json!(false));
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let base = json!({"a": {"x": 1}});
        let over = json!({"a": {"y": 2}});
        let _ = dict_merge(&base, &over);
        assert_eq!(base, json!({"a": {"x": 1}}));
        assert_eq!(over, json!({"a": {"y": 2}}));
    }
}
