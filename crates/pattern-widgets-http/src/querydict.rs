//! Form data dictionary for submitted widget values.
//!
//! [`QueryDict`] wraps [`MultiValueDict`](pattern_widgets_core::utils::MultiValueDict)
//! to provide a read-only dictionary for query strings and
//! `application/x-www-form-urlencoded` bodies.

use pattern_widgets_core::utils::MultiValueDict;

/// A read-only dictionary of query string and form data.
///
/// Widgets only ever read from it, one key per call.
///
/// # Examples
///
/// ```
/// use pattern_widgets_http::QueryDict;
///
/// let qd = QueryDict::parse("start=2024-01-15&tags=a&tags=b");
/// assert_eq!(qd.get("start"), Some("2024-01-15"));
/// assert_eq!(qd.get_list("tags"), Some(&vec!["a".to_string(), "b".to_string()]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct QueryDict {
    data: MultiValueDict<String, String>,
}

impl QueryDict {
    /// Creates a new, empty `QueryDict`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a `QueryDict` from already-decoded pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut data = MultiValueDict::new();
        for (key, value) in pairs {
            data.append(key.into(), value.into());
        }
        Self { data }
    }

    /// Parses a URL-encoded string (e.g. `"key1=val1&key2=val2"`).
    ///
    /// Handles percent-encoding and `+` as space, and supports multiple
    /// values per key.
    pub fn parse(query_string: &str) -> Self {
        Self::from_pairs(
            query_string
                .split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| {
                    let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                    (percent_decode(key), percent_decode(value))
                }),
        )
    }

    /// Returns the last value for the given key, or `None` if not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(&key.to_string()).map(String::as_str)
    }

    /// Returns all values for the given key, or `None` if not present.
    pub fn get_list(&self, key: &str) -> Option<&Vec<String>> {
        self.data.get_list(&key.to_string())
    }

    /// Returns a new dictionary with every value of `other` appended after
    /// this one's. Used when combining query string and body data.
    #[must_use]
    pub fn merged_with(&self, other: &Self) -> Self {
        let mut data = self.data.clone();
        for (key, values) in other.data.iter() {
            for value in values {
                data.append(key.clone(), value.clone());
            }
        }
        Self { data }
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the `QueryDict` contains no keys.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decodes a percent-encoded form value, treating `+` as a space.
fn percent_decode(input: &str) -> String {
    let plus_decoded = input.replace('+', " ");
    percent_encoding::percent_decode_str(&plus_decoded)
        .decode_utf8_lossy()
        .into_owned()
}
