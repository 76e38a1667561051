//! Stream field model for custom content-type schemas.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::stream_fields;

/// Stream field model representing one schema element of a content type.
///
/// Fields are loaded in bulk per namespace when a content type is
/// accessed and treated as immutable for the rest of the request.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = stream_fields)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct StreamField {
    /// Unique field identifier.
    pub id: Uuid,
    /// Stream namespace this field belongs to.
    pub field_namespace: String,
    /// Machine-safe identifier, unique within the namespace.
    pub field_slug: String,
    /// Human-readable field name.
    pub field_name: String,
    /// Discriminator selecting the runtime type handler.
    pub field_type: String,
    /// Type-specific configuration.
    pub config: serde_json::Value,
    /// Position within the stream's field list.
    pub ordering: i32,
    /// Timestamp when the field was created.
    pub created_at: Timestamp,
    /// Timestamp when the field was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new stream field.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = stream_fields)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewStreamField {
    /// Stream namespace.
    pub field_namespace: String,
    /// Machine-safe identifier.
    pub field_slug: String,
    /// Human-readable field name.
    pub field_name: String,
    /// Type handler discriminator.
    pub field_type: String,
    /// Type-specific configuration.
    pub config: serde_json::Value,
    /// Position within the stream's field list.
    pub ordering: i32,
}

/// Data for updating a stream field.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = stream_fields)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateStreamField {
    /// Human-readable field name.
    pub field_name: Option<String>,
    /// Type-specific configuration.
    pub config: Option<serde_json::Value>,
    /// Position within the stream's field list.
    pub ordering: Option<i32>,
}

impl NewStreamField {
    /// Creates a new field definition with empty configuration.
    pub fn new(
        namespace: impl Into<String>,
        slug: impl Into<String>,
        name: impl Into<String>,
        field_type: impl Into<String>,
    ) -> Self {
        Self {
            field_namespace: namespace.into(),
            field_slug: slug.into(),
            field_name: name.into(),
            field_type: field_type.into(),
            config: serde_json::Value::Object(serde_json::Map::new()),
            ordering: 0,
        }
    }

    /// Sets the type-specific configuration.
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        self.config = config;
        self
    }

    /// Sets the position within the stream's field list.
    pub fn with_ordering(mut self, ordering: i32) -> Self {
        self.ordering = ordering;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_empty_config() {
        let field = NewStreamField::new("blog", "title", "Title", "text");

        assert_eq!(field.field_namespace, "blog");
        assert_eq!(field.config, serde_json::json!({}));
        assert_eq!(field.ordering, 0);
    }

    #[test]
    fn test_builders() {
        let field = NewStreamField::new("blog", "intro", "Intro", "textarea")
            .with_config(serde_json::json!({"max_length": 500}))
            .with_ordering(3);

        assert_eq!(field.config["max_length"], 500);
        assert_eq!(field.ordering, 3);
    }
}
