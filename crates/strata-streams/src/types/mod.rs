//! Runtime type handlers for stream field values.
//!
//! A handler knows how to render and validate one kind of field value.
//! Handlers are instantiated through the [`FieldTypeRegistry`], keyed by
//! the field's `field_type` discriminator, optionally binding the value
//! the current entry holds for the field.

mod handlers;

use std::collections::HashMap;
use std::fmt;

pub use handlers::{IntegerFieldType, TextFieldType, TextareaFieldType};
use serde_json::Value;
use thiserror::Error;

use crate::TRACING_TARGET_FIELDS;
use crate::field::Field;

/// A field value rejected by its type handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for field type '{field_type}': {message}")]
pub struct InvalidValue {
    /// The handler's type name.
    pub field_type: String,
    /// Why the value was rejected.
    pub message: String,
}

impl InvalidValue {
    /// Creates a new rejection for a handler.
    pub fn new(field_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_type: field_type.into(),
            message: message.into(),
        }
    }
}

/// Entry context handed to handlers at instantiation.
///
/// Carries the entry's identifier and its stored field values so a
/// handler can bind the value belonging to its field.
#[derive(Debug, Clone, Default)]
pub struct EntryContext {
    /// Opaque entry identifier.
    pub entry_id: String,
    values: HashMap<String, Value>,
}

impl EntryContext {
    /// Creates a context for an entry with no values.
    pub fn new(entry_id: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            values: HashMap::new(),
        }
    }

    /// Adds a stored field value, returning self for chained construction.
    pub fn with_value(mut self, slug: impl Into<String>, value: Value) -> Self {
        self.values.insert(slug.into(), value);
        self
    }

    /// Returns the stored value for a field slug.
    pub fn value(&self, slug: &str) -> Option<&Value> {
        self.values.get(slug)
    }
}

/// A runtime object that renders and validates one kind of field value.
pub trait FieldTypeHandler: Send + Sync {
    /// The `field_type` discriminator this handler serves.
    fn field_type(&self) -> &'static str;

    /// Validates a value against the handler's rules and configuration.
    fn validate(&self, value: &Value) -> Result<(), InvalidValue>;

    /// Formats a value for display.
    fn render(&self, value: &Value) -> String;

    /// Returns the entry value bound at instantiation, if any.
    fn bound_value(&self) -> Option<&Value>;

    /// Renders the bound entry value, if any.
    fn render_bound(&self) -> Option<String> {
        self.bound_value().map(|value| self.render(value))
    }
}

impl fmt::Debug for dyn FieldTypeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldTypeHandler")
            .field("field_type", &self.field_type())
            .finish_non_exhaustive()
    }
}

/// Constructor for a handler, bound to a field definition and an
/// optional entry context.
pub type HandlerConstructor = fn(&Field, Option<&EntryContext>) -> Box<dyn FieldTypeHandler>;

/// Registry of known field types.
#[derive(Debug, Default)]
pub struct FieldTypeRegistry {
    constructors: HashMap<String, HandlerConstructor>,
}

impl FieldTypeRegistry {
    /// Creates a registry with no types registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in text, textarea and integer types.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("text", |field, entry| {
            Box::new(TextFieldType::for_field(field, entry))
        });
        registry.register("textarea", |field, entry| {
            Box::new(TextareaFieldType::for_field(field, entry))
        });
        registry.register("integer", |field, entry| {
            Box::new(IntegerFieldType::for_field(field, entry))
        });
        registry
    }

    /// Registers a constructor for a field type, replacing any previous one.
    pub fn register(&mut self, field_type: impl Into<String>, constructor: HandlerConstructor) {
        self.constructors.insert(field_type.into(), constructor);
    }

    /// Instantiates the handler for a field, binding the entry context.
    ///
    /// Returns `None` when the field's type is not registered.
    pub fn instantiate(
        &self,
        field: &Field,
        entry: Option<&EntryContext>,
    ) -> Option<Box<dyn FieldTypeHandler>> {
        let constructor = self.constructors.get(&field.field_type);
        if constructor.is_none() {
            tracing::debug!(
                target: TRACING_TARGET_FIELDS,
                field_type = %field.field_type,
                slug = %field.slug,
                "No handler registered for field type"
            );
        }

        constructor.map(|constructor| constructor(field, entry))
    }

    /// Returns whether a field type is registered.
    pub fn contains(&self, field_type: &str) -> bool {
        self.constructors.contains_key(field_type)
    }
}

/// Instantiated handlers keyed by type name.
///
/// Produced by [`FieldCollection::get_types`]; insertion overwrites, so
/// the collection holds at most one handler per distinct type.
///
/// [`FieldCollection::get_types`]: crate::FieldCollection::get_types
#[derive(Debug, Default)]
pub struct FieldTypeCollection {
    handlers: HashMap<String, Box<dyn FieldTypeHandler>>,
}

impl FieldTypeCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a handler under a type name, replacing any previous one.
    pub fn insert(&mut self, field_type: String, handler: Box<dyn FieldTypeHandler>) {
        self.handlers.insert(field_type, handler);
    }

    /// Returns the handler for a type name.
    pub fn get(&self, field_type: &str) -> Option<&dyn FieldTypeHandler> {
        self.handlers.get(field_type).map(Box::as_ref)
    }

    /// Returns the number of distinct types held.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns whether the collection holds no handlers.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Iterates the held type names.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}
