//! Registry of available pattern widgets.
//!
//! Hosts look widgets up by name, or list the ones suitable for a given field
//! type, and instantiate them through [`WidgetRegistry::create`].

use std::collections::HashMap;

use pattern_widgets_core::{WidgetError, WidgetResult};

use crate::widgets::{create_widget, PatternWidget, WidgetKind};

/// Metadata describing one registered widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetRegistration {
    /// Unique registry name, e.g. `"DateWidget"`.
    pub name: String,
    /// Which built-in adapter this registration creates.
    pub kind: WidgetKind,
    /// Human-readable title.
    pub title: String,
    /// Short description shown to site builders.
    pub description: String,
    /// Field type names this widget can edit.
    pub used_for: Vec<String>,
}

impl WidgetRegistration {
    /// Creates a registration named after `kind`.
    pub fn new(kind: WidgetKind, title: &str, description: &str, used_for: &[&str]) -> Self {
        Self {
            name: kind.to_string(),
            kind,
            title: title.to_string(),
            description: description.to_string(),
            used_for: used_for.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Widget registrations in registration order.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    registrations: Vec<WidgetRegistration>,
    names: HashMap<String, usize>,
}

impl WidgetRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a registration.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::ImproperlyConfigured`] if a widget with the same
    /// name is already registered.
    pub fn register(&mut self, registration: WidgetRegistration) -> WidgetResult<()> {
        if self.names.contains_key(&registration.name) {
            return Err(WidgetError::ImproperlyConfigured(format!(
                "Widget '{}' is already registered",
                registration.name
            )));
        }
        self.push(registration);
        Ok(())
    }

    fn push(&mut self, registration: WidgetRegistration) {
        tracing::debug!(
            widget = %registration.name,
            used_for = ?registration.used_for,
            "registered pattern widget"
        );
        self.names
            .insert(registration.name.clone(), self.registrations.len());
        self.registrations.push(registration);
    }

    /// Returns the registration with the given name.
    pub fn get(&self, name: &str) -> Option<&WidgetRegistration> {
        self.names.get(name).map(|&idx| &self.registrations[idx])
    }

    /// Returns the registrations usable for `field_type`, in registration order.
    pub fn for_field_type(&self, field_type: &str) -> Vec<&WidgetRegistration> {
        self.registrations
            .iter()
            .filter(|r| r.used_for.iter().any(|t| t == field_type))
            .collect()
    }

    /// Iterates over all registrations in order.
    pub fn iter(&self) -> impl Iterator<Item = &WidgetRegistration> {
        self.registrations.iter()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Instantiates the named widget with its default configuration.
    pub fn create(&self, name: &str) -> Option<Box<dyn PatternWidget>> {
        self.get(name).map(|r| create_widget(r.kind))
    }
}

/// Returns a registry holding the built-in date, date-time, and select widgets.
pub fn default_registry() -> WidgetRegistry {
    let mut registry = WidgetRegistry::new();
    // One registration per kind, so names cannot collide.
    for kind in [WidgetKind::Date, WidgetKind::Datetime, WidgetKind::Select] {
        let (title, used_for) = match kind {
            WidgetKind::Date => ("Date widget", "DateTimeField"),
            WidgetKind::Datetime => ("Datetime widget", "DateTimeField"),
            WidgetKind::Select => ("Select widget", "SelectField"),
        };
        registry.push(WidgetRegistration::new(kind, title, title, &[used_for]));
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = default_registry();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get("DateWidget").unwrap().title, "Date widget");
        assert_eq!(registry.get("DatetimeWidget").unwrap().title, "Datetime widget");
        assert_eq!(registry.get("SelectWidget").unwrap().title, "Select widget");
        for registration in registry.iter() {
            assert_eq!(registration.description, registration.title);
        }
        assert!(registry.get("Nope").is_none());
    }

    #[test]
    fn test_for_field_type_keeps_order() {
        let registry = default_registry();
        let names: Vec<&str> = registry
            .for_field_type("DateTimeField")
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["DateWidget", "DatetimeWidget"]);
        assert_eq!(registry.for_field_type("SelectField").len(), 1);
        assert!(registry.for_field_type("TextField").is_empty());
    }

    #[test]
    fn test_register_duplicate_fails() {
        let mut registry = default_registry();
        let err = registry
            .register(WidgetRegistration::new(WidgetKind::Date, "Again", "", &[]))
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_create() {
        let registry = default_registry();
        let widget = registry.create("DatetimeWidget").unwrap();
        assert_eq!(widget.kind(), WidgetKind::Datetime);
        assert_eq!(widget.config().pattern(), "pickadate");
        assert!(registry.create("Missing").is_none());
    }

    #[test]
    fn test_empty_registry() {
        let registry = WidgetRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
