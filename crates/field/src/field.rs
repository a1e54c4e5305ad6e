//! Single text input bound to a schema

use std::fmt;
use std::sync::Arc;

use glint_validator::foundation::{Schema, SchemaExt, SchemaResult};

/// When a [`TextField`] evaluates its schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationTrigger {
    /// Evaluate on every text change and on submit.
    #[default]
    OnChange,
    /// Evaluate only on submit.
    OnSubmit,
}

type ErrorListener = Box<dyn FnMut(Option<&str>) + Send>;

/// A text value bound to a schema.
///
/// The field never renders anything itself. Hosts read
/// [`error_message`](Self::error_message) after each change, or register an
/// [`on_error_change`](Self::on_error_change) listener.
///
/// With [`ValidationTrigger::OnSubmit`], edits leave the displayed error as it
/// was until the next [`submit`](Self::submit).
pub struct TextField<S: Schema> {
    schema: Arc<S>,
    text: String,
    trigger: ValidationTrigger,
    error: Option<String>,
    listeners: Vec<ErrorListener>,
}

impl<S: Schema> TextField<S> {
    /// Creates an empty field that validates on change.
    pub fn new(schema: S) -> Self {
        Self::shared(Arc::new(schema))
    }

    /// Creates an empty field bound to a schema shared with other fields.
    pub fn shared(schema: Arc<S>) -> Self {
        Self {
            schema,
            text: String::new(),
            trigger: ValidationTrigger::default(),
            error: None,
            listeners: Vec::new(),
        }
    }

    /// Sets the trigger.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_trigger(mut self, trigger: ValidationTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Sets the initial text without evaluating.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Turns evaluation on every change on or off.
    pub fn set_validate_on_change(&mut self, enabled: bool) {
        self.trigger = if enabled {
            ValidationTrigger::OnChange
        } else {
            ValidationTrigger::OnSubmit
        };
    }

    /// Returns true when edits trigger evaluation.
    pub fn validates_on_change(&self) -> bool {
        self.trigger == ValidationTrigger::OnChange
    }

    /// Current trigger.
    pub fn trigger(&self) -> ValidationTrigger {
        self.trigger
    }

    /// The bound schema.
    pub fn schema(&self) -> &Arc<S> {
        &self.schema
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The error to display, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Returns true if an error is displayed.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Registers a listener called with the new error whenever it changes.
    pub fn on_error_change(&mut self, listener: impl FnMut(Option<&str>) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Replaces the text, evaluating when the trigger is [`ValidationTrigger::OnChange`].
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if self.validates_on_change() {
            let result = self.schema.check(&self.text);
            self.display(&result);
        } else {
            tracing::trace!("text changed, evaluation deferred to submit");
        }
    }

    /// Evaluates the current text regardless of trigger and displays the outcome.
    pub fn submit(&mut self) -> SchemaResult<S::Output> {
        let result = self.schema.check(&self.text);
        self.display(&result);
        result
    }

    /// Empties the text and hides any error.
    pub fn clear(&mut self) {
        self.text.clear();
        self.set_error(None);
    }

    fn display(&mut self, result: &SchemaResult<S::Output>) {
        self.set_error(result.error_message().map(str::to_owned));
    }

    fn set_error(&mut self, error: Option<String>) {
        if self.error == error {
            return;
        }
        tracing::debug!(error = ?error, "field error changed");
        self.error = error;
        for listener in &mut self.listeners {
            listener(self.error.as_deref());
        }
    }
}

impl<S: Schema + fmt::Debug> fmt::Debug for TextField<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextField")
            .field("schema", &self.schema)
            .field("text", &self.text)
            .field("trigger", &self.trigger)
            .field("error", &self.error)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
