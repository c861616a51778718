//! A dictionary that can hold multiple values per key.
//!
//! Submitted form data routinely repeats a key (a multi-select posts one pair
//! per selected option), so form data is stored in a [`MultiValueDict`].

/// An insertion-ordered dictionary that maps keys to lists of values.
///
/// [`get`](MultiValueDict::get) returns the **last** value for a key, while
/// [`get_list`](MultiValueDict::get_list) returns all values. Keys iterate in
/// the order they were first inserted. Lookups are linear, which suits the
/// handful of fields a single form submission carries.
///
/// # Examples
///
/// ```
/// use pattern_widgets_core::utils::MultiValueDict;
///
/// let mut d = MultiValueDict::new();
/// d.append("color".to_string(), "red");
/// d.append("color".to_string(), "blue");
///
/// assert_eq!(d.get(&"color".to_string()), Some(&"blue"));
/// assert_eq!(d.get_list(&"color".to_string()), Some(&vec!["red", "blue"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiValueDict<K, V> {
    entries: Vec<(K, Vec<V>)>,
}

impl<K, V> Default for MultiValueDict<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq, V> MultiValueDict<K, V> {
    /// Creates an empty `MultiValueDict`.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &K) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    /// Returns a reference to the **last** value associated with the key,
    /// or `None` if the key is not present.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_list(key).and_then(|values| values.last())
    }

    /// Returns a reference to all values associated with the key,
    /// or `None` if the key is not present.
    pub fn get_list(&self, key: &K) -> Option<&Vec<V>> {
        self.position(key).map(|idx| &self.entries[idx].1)
    }

    /// Appends a value to the list for the given key.
    pub fn append(&mut self, key: K, value: V) {
        match self.position(&key) {
            Some(idx) => self.entries[idx].1.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Returns an iterator over (key, value-list) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Vec<V>)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the dictionary contains no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
