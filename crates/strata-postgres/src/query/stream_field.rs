//! Stream fields repository for content-type schema operations.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{NewStreamField, StreamField, UpdateStreamField};
use crate::{PgClient, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for stream field database operations.
///
/// Field definitions are written rarely and read in bulk: a content
/// type's whole schema is fetched per namespace when the type is
/// accessed.
pub trait StreamFieldRepository {
    /// Creates a new field definition.
    fn create_field(
        &self,
        new_field: NewStreamField,
    ) -> impl Future<Output = PgResult<StreamField>> + Send;

    /// Finds all fields of a namespace in schema order.
    fn find_fields_by_namespace(
        &self,
        namespace: &str,
    ) -> impl Future<Output = PgResult<Vec<StreamField>>> + Send;

    /// Finds one field by its slug within a namespace.
    fn find_field_by_slug(
        &self,
        namespace: &str,
        slug: &str,
    ) -> impl Future<Output = PgResult<Option<StreamField>>> + Send;

    /// Updates a field definition.
    fn update_field(
        &self,
        field_id: Uuid,
        updates: UpdateStreamField,
    ) -> impl Future<Output = PgResult<StreamField>> + Send;

    /// Deletes a field definition.
    fn delete_field(&self, field_id: Uuid) -> impl Future<Output = PgResult<()>> + Send;
}

impl StreamFieldRepository for PgClient {
    async fn create_field(&self, new_field: NewStreamField) -> PgResult<StreamField> {
        let mut conn = self.get_connection().await?;

        use schema::stream_fields;

        let field = diesel::insert_into(stream_fields::table)
            .values(&new_field)
            .returning(StreamField::as_returning())
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            field_id = %field.id,
            namespace = %field.field_namespace,
            slug = %field.field_slug,
            "Stream field created"
        );

        Ok(field)
    }

    async fn find_fields_by_namespace(&self, namespace: &str) -> PgResult<Vec<StreamField>> {
        let mut conn = self.get_connection().await?;

        use schema::stream_fields::{self, dsl};

        let fields = stream_fields::table
            .filter(dsl::field_namespace.eq(namespace))
            .order((dsl::ordering.asc(), dsl::created_at.asc()))
            .select(StreamField::as_select())
            .load(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(fields)
    }

    async fn find_field_by_slug(
        &self,
        namespace: &str,
        slug: &str,
    ) -> PgResult<Option<StreamField>> {
        let mut conn = self.get_connection().await?;

        use schema::stream_fields::{self, dsl};

        let field = stream_fields::table
            .filter(dsl::field_namespace.eq(namespace))
            .filter(dsl::field_slug.eq(slug))
            .select(StreamField::as_select())
            .first(&mut *conn)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(field)
    }

    async fn update_field(
        &self,
        field_id: Uuid,
        updates: UpdateStreamField,
    ) -> PgResult<StreamField> {
        let mut conn = self.get_connection().await?;

        use schema::stream_fields::{self, dsl};

        let field = diesel::update(stream_fields::table.filter(dsl::id.eq(field_id)))
            .set(&updates)
            .returning(StreamField::as_returning())
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(field)
    }

    async fn delete_field(&self, field_id: Uuid) -> PgResult<()> {
        let mut conn = self.get_connection().await?;

        use schema::stream_fields::{self, dsl};

        diesel::delete(stream_fields::table.filter(dsl::id.eq(field_id)))
            .execute(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(())
    }
}
