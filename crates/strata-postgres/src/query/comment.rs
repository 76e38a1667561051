//! Comments repository for entry discussion operations.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use super::Pagination;
use crate::model::{Account, Comment, NewComment, UpdateComment};
use crate::types::CommentStatus;
use crate::{PgClient, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for comment database operations.
///
/// Handles the comment lifecycle from submission through moderation,
/// plus the entry-scoped fetches the display pipeline is built on.
pub trait CommentRepository {
    /// Creates a new comment.
    fn create_comment(
        &self,
        new_comment: NewComment,
    ) -> impl Future<Output = PgResult<Comment>> + Send;

    /// Finds a comment by its unique identifier.
    fn find_comment_by_id(
        &self,
        comment_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Comment>>> + Send;

    /// Finds approved comments for an entry, oldest first, joined with
    /// the authoring account when one exists.
    ///
    /// An entry is addressed by module, singular entry key and entry id
    /// together.
    fn find_comments_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
        pagination: Pagination,
    ) -> impl Future<Output = PgResult<Vec<(Comment, Option<Account>)>>> + Send;

    /// Counts approved comments for an entry without materializing rows.
    fn count_comments_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> impl Future<Output = PgResult<i64>> + Send;

    /// Updates a comment with new content or status.
    fn update_comment(
        &self,
        comment_id: Uuid,
        updates: UpdateComment,
    ) -> impl Future<Output = PgResult<Comment>> + Send;

    /// Marks a comment as approved.
    fn approve_comment(&self, comment_id: Uuid) -> impl Future<Output = PgResult<Comment>> + Send;

    /// Marks a comment as spam.
    fn mark_comment_spam(&self, comment_id: Uuid)
    -> impl Future<Output = PgResult<Comment>> + Send;
}

impl CommentRepository for PgClient {
    async fn create_comment(&self, new_comment: NewComment) -> PgResult<Comment> {
        let mut conn = self.get_connection().await?;

        use schema::comments;

        let comment = diesel::insert_into(comments::table)
            .values(&new_comment)
            .returning(Comment::as_returning())
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            comment_id = %comment.id,
            module = %comment.module,
            entry_id = %comment.entry_id,
            "Comment created"
        );

        Ok(comment)
    }

    async fn find_comment_by_id(&self, comment_id: Uuid) -> PgResult<Option<Comment>> {
        let mut conn = self.get_connection().await?;

        use schema::comments::{self, dsl};

        let comment = comments::table
            .filter(dsl::id.eq(comment_id))
            .select(Comment::as_select())
            .first(&mut *conn)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(comment)
    }

    async fn find_comments_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
        pagination: Pagination,
    ) -> PgResult<Vec<(Comment, Option<Account>)>> {
        let mut conn = self.get_connection().await?;

        use schema::accounts;
        use schema::comments::{self, dsl};

        let comments = comments::table
            .left_join(accounts::table)
            .filter(dsl::module.eq(module))
            .filter(dsl::entry_key.eq(entry_key))
            .filter(dsl::entry_id.eq(entry_id))
            .filter(dsl::status.eq(CommentStatus::Approved))
            .order(dsl::created_at.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select((Comment::as_select(), Option::<Account>::as_select()))
            .load(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(comments)
    }

    async fn count_comments_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> PgResult<i64> {
        let mut conn = self.get_connection().await?;

        use schema::comments::{self, dsl};

        let count = comments::table
            .filter(dsl::module.eq(module))
            .filter(dsl::entry_key.eq(entry_key))
            .filter(dsl::entry_id.eq(entry_id))
            .filter(dsl::status.eq(CommentStatus::Approved))
            .count()
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(count)
    }

    async fn update_comment(&self, comment_id: Uuid, updates: UpdateComment) -> PgResult<Comment> {
        let mut conn = self.get_connection().await?;

        use schema::comments::{self, dsl};

        let comment = diesel::update(comments::table.filter(dsl::id.eq(comment_id)))
            .set(&updates)
            .returning(Comment::as_returning())
            .get_result(&mut *conn)
            .await
            .map_err(PgError::from)?;

        Ok(comment)
    }

    async fn approve_comment(&self, comment_id: Uuid) -> PgResult<Comment> {
        self.update_comment(
            comment_id,
            UpdateComment {
                status: Some(CommentStatus::Approved),
                ..Default::default()
            },
        )
        .await
    }

    async fn mark_comment_spam(&self, comment_id: Uuid) -> PgResult<Comment> {
        self.update_comment(
            comment_id,
            UpdateComment {
                status: Some(CommentStatus::Spam),
                ..Default::default()
            },
        )
        .await
    }
}
