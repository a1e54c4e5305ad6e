//! Named group of fields validated together on submission

use indexmap::IndexMap;
use serde_json::Value;

use glint_validator::foundation::ErrorMap;
use glint_validator::schemas::AnySchema;

use crate::{TextField, ValidationTrigger};

/// Errors raised by [`Form`] lookups.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    /// No field is registered under the name.
    #[error("unknown field `{0}`")]
    UnknownField(String),
}

/// An ordered set of named text fields.
///
/// [`submit_all`](Form::submit_all) evaluates every field and keys failures by
/// field name, in registration order.
///
/// ```
/// use glint_field::Form;
/// use glint_validator::prelude::*;
///
/// let mut form = Form::new()
///     .with_field("email", StringSchema::new().email("Invalid email"))
///     .with_field("name", StringSchema::new().min(2, "Too short"));
///
/// form.set_text("email", "invalid")?;
/// form.set_text("name", "Al")?;
///
/// let errors = form.submit_all().unwrap_err();
/// assert_eq!(errors.get("email"), Some("Invalid email"));
/// assert_eq!(errors.get("name"), None);
/// # Ok::<(), glint_field::FormError>(())
/// ```
#[derive(Debug, Default)]
pub struct Form {
    fields: IndexMap<String, TextField<AnySchema>>,
    trigger: ValidationTrigger,
}

impl Form {
    /// Creates an empty form whose fields validate on change.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trigger applied to every field, present and future.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_trigger(mut self, trigger: ValidationTrigger) -> Self {
        self.trigger = trigger;
        let on_change = trigger == ValidationTrigger::OnChange;
        for field in self.fields.values_mut() {
            field.set_validate_on_change(on_change);
        }
        self
    }

    /// Registers a field. Re-using a name replaces the earlier field in place.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, name: impl Into<String>, schema: impl Into<AnySchema>) -> Self {
        self.add_field(name, schema);
        self
    }

    /// In-place form of [`with_field`](Self::with_field).
    pub fn add_field(&mut self, name: impl Into<String>, schema: impl Into<AnySchema>) -> &mut Self {
        let field = TextField::new(schema.into()).with_trigger(self.trigger);
        self.fields.insert(name.into(), field);
        self
    }

    /// Looks up a field.
    pub fn field(&self, name: &str) -> Option<&TextField<AnySchema>> {
        self.fields.get(name)
    }

    /// Looks up a field mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut TextField<AnySchema>> {
        self.fields.get_mut(name)
    }

    /// Field names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Updates a field's text.
    pub fn set_text(&mut self, name: &str, text: impl Into<String>) -> Result<(), FormError> {
        let field = self
            .fields
            .get_mut(name)
            .ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        field.set_text(text);
        Ok(())
    }

    /// Currently displayed errors, keyed by field name.
    pub fn errors(&self) -> ErrorMap {
        self.fields
            .iter()
            .filter_map(|(name, field)| field.error_message().map(|message| (name.as_str(), message)))
            .collect()
    }

    /// Submits every field.
    ///
    /// Returns the validated values keyed by field name, or the first message
    /// of every failing field.
    pub fn submit_all(&mut self) -> Result<IndexMap<String, Value>, ErrorMap> {
        let mut values = IndexMap::with_capacity(self.fields.len());
        let mut errors = ErrorMap::new();

        for (name, field) in &mut self.fields {
            match field.submit().into_result() {
                Ok(value) => {
                    values.insert(name.clone(), value);
                }
                Err(field_errors) => {
                    if let Some(message) = field_errors.first_message() {
                        errors.insert(name.as_str(), message);
                    }
                }
            }
        }

        if errors.is_empty() {
            tracing::debug!(fields = values.len(), "form submitted");
            Ok(values)
        } else {
            tracing::debug!(failed = errors.len(), "form submission rejected");
            Err(errors)
        }
    }

    /// Clears every field.
    pub fn clear(&mut self) {
        for field in self.fields.values_mut() {
            field.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_validator::schemas::StringSchema;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn signup() -> Form {
        Form::new()
            .with_field("email", StringSchema::new().email("Invalid email"))
            .with_field("password", StringSchema::new().min(8, "Too short"))
    }

    #[test]
    fn test_submit_all_success() {
        let mut form = signup();
        form.set_text("email", "a@b.c").unwrap();
        form.set_text("password", "hunter22").unwrap();

        let values = form.submit_all().unwrap();
        assert_eq!(values.get("email"), Some(&json!("a@b.c")));
        assert_eq!(values.get("password"), Some(&json!("hunter22")));
    }

    #[test]
    fn test_submit_all_collects_failures_in_order() {
        let mut form = signup();
        let errors = form.submit_all().unwrap_err();
        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![("email", "Invalid email"), ("password", "Too short")]
        );
        assert_eq!(form.errors(), errors);
    }

    #[test]
    fn test_unknown_field() {
        let mut form = signup();
        assert_eq!(
            form.set_text("nope", "x"),
            Err(FormError::UnknownField("nope".into()))
        );
    }

    #[test]
    fn test_on_submit_form() {
        let mut form = signup().with_trigger(ValidationTrigger::OnSubmit);
        form.set_text("email", "bad").unwrap();
        assert!(form.errors().is_empty());

        form.add_field("nickname", StringSchema::new().max(4, "Too long"));
        assert_eq!(
            form.field("nickname").map(TextField::trigger),
            Some(ValidationTrigger::OnSubmit)
        );
        form.set_text("nickname", "glint").unwrap();
        assert!(form.errors().is_empty());

        let errors = form.submit_all().unwrap_err();
        assert_eq!(errors.get("email"), Some("Invalid email"));
        assert_eq!(errors.get("nickname"), Some("Too long"));
    }

    #[test]
    fn test_clear() {
        let mut form = signup();
        form.set_text("email", "bad").unwrap();
        assert_eq!(form.errors().len(), 1);

        form.clear();
        assert!(form.errors().is_empty());
        assert_eq!(form.field("email").map(TextField::text), Some(""));
        assert_eq!(form.names().collect::<Vec<_>>(), vec!["email", "password"]);
        assert_eq!(form.len(), 2);
    }
}
