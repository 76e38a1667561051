//! Domain representation of a stream field.

use strata_postgres::model::StreamField;
use uuid::Uuid;

/// One schema element of a content type.
///
/// This is the request-scoped, immutable shape of a
/// [`StreamField`] row; the persistence details (timestamps, change
/// sets) stay behind in the model.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Unique field identifier.
    pub id: Uuid,
    /// Machine-safe identifier, unique within the owning collection.
    pub slug: String,
    /// Human-readable field name.
    pub name: String,
    /// Discriminator selecting the runtime type handler.
    pub field_type: String,
    /// Stream namespace this field belongs to.
    pub namespace: String,
    /// Type-specific configuration.
    pub config: serde_json::Value,
    /// Position within the stream's field list.
    pub ordering: i32,
}

impl Field {
    /// Creates a field with the identifying triple; mostly useful in tests
    /// and wiring code that does not go through the schema store.
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            name: name.into(),
            field_type: field_type.into(),
            namespace: String::new(),
            config: serde_json::Value::Object(serde_json::Map::new()),
            ordering: 0,
        }
    }

    /// Sets the namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Sets the type-specific configuration.
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = config;
        self
    }

    /// Returns whether the field has a usable slug.
    ///
    /// The schema store enforces the slug format, but collections built
    /// from other sources may carry empty slugs; those fields stay
    /// unindexed.
    pub fn has_slug(&self) -> bool {
        !self.slug.is_empty()
    }
}

impl From<StreamField> for Field {
    fn from(model: StreamField) -> Self {
        Self {
            id: model.id,
            slug: model.field_slug,
            name: model.field_name,
            field_type: model.field_type,
            namespace: model.field_namespace,
            config: model.config,
            ordering: model.ordering,
        }
    }
}
