//! Content objects, field descriptors, and vocabularies.
//!
//! Widgets never own data. They read the stored value through a [`Field`]
//! accessor on some [`Content`], and selection widgets enumerate their choices
//! from a [`VocabularySource`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// A content object whose fields widgets display.
pub trait Content {
    /// Returns the stored value of the named field, if the object has one.
    fn get(&self, field_name: &str) -> Option<FieldValue>;
}

impl Content for HashMap<String, FieldValue> {
    fn get(&self, field_name: &str) -> Option<FieldValue> {
        HashMap::get(self, field_name).cloned()
    }
}

/// An ordered list of `(key, label)` choices.
///
/// Order and duplicates are preserved exactly as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    items: Vec<(String, String)>,
}

impl Vocabulary {
    /// Creates a vocabulary from `(key, label)` pairs.
    pub fn new<K: Into<String>, L: Into<String>>(items: impl IntoIterator<Item = (K, L)>) -> Self {
        items.into_iter().collect()
    }

    /// Returns the choices in order.
    pub fn items(&self) -> &[(String, String)] {
        &self.items
    }

    /// Returns the label for `key`, if present.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, label)| label.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<K: Into<String>, L: Into<String>> FromIterator<(K, L)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (K, L)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, l)| (k.into(), l.into()))
                .collect(),
        }
    }
}

/// Supplies the vocabulary of a selection field for a given content object.
pub trait VocabularySource: Send + Sync {
    fn vocabulary(&self, context: &dyn Content) -> Vocabulary;
}

/// A fixed vocabulary that ignores the context.
impl VocabularySource for Vocabulary {
    fn vocabulary(&self, _context: &dyn Content) -> Vocabulary {
        self.clone()
    }
}

/// Describes one field of a content type.
pub trait Field {
    /// The field name, also used as the form key.
    fn name(&self) -> &str;

    /// The storage type name, matched against widget registrations
    /// (e.g. `"DateTimeField"`).
    fn field_type(&self) -> &str;

    /// Reads the stored value from `context`.
    fn accessor(&self, context: &dyn Content) -> FieldValue {
        context.get(self.name()).unwrap_or_default()
    }

    /// Returns the choices for this field. Non-selection fields have none.
    fn vocabulary(&self, _context: &dyn Content) -> Vocabulary {
        Vocabulary::default()
    }
}

/// A plain field definition with an optional vocabulary.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use pattern_widgets_forms::field::{Field, FieldDef, Vocabulary};
/// use pattern_widgets_forms::value::FieldValue;
///
/// let field = FieldDef::new("color", "SelectField")
///     .with_vocabulary(Vocabulary::new([("r", "Red"), ("g", "Green")]));
/// let content: HashMap<String, FieldValue> = HashMap::new();
/// assert_eq!(field.vocabulary(&content).len(), 2);
/// assert_eq!(field.accessor(&content), FieldValue::Empty);
/// ```
#[derive(Clone)]
pub struct FieldDef {
    name: String,
    field_type: String,
    vocabulary: Option<Arc<dyn VocabularySource>>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            vocabulary: None,
        }
    }

    /// Attaches a vocabulary source.
    #[must_use]
    pub fn with_vocabulary(mut self, source: impl VocabularySource + 'static) -> Self {
        self.vocabulary = Some(Arc::new(source));
        self
    }
}

impl fmt::Debug for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("field_type", &self.field_type)
            .field("has_vocabulary", &self.vocabulary.is_some())
            .finish()
    }
}

impl Field for FieldDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_type(&self) -> &str {
        &self.field_type
    }

    fn vocabulary(&self, context: &dyn Content) -> Vocabulary {
        self.vocabulary
            .as_ref()
            .map(|source| source.vocabulary(context))
            .unwrap_or_default()
    }
}
