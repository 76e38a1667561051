//! Comment persistence seam.

use std::sync::RwLock;

use async_trait::async_trait;
use strata_postgres::query::{CommentRepository, Pagination};
use strata_postgres::types::constants::database;
use strata_postgres::PgClient;

use crate::comment::Comment;
use crate::error::{CommentsError, CommentsResult};

/// Read access to the comments persisted for an entry.
///
/// Only approved comments are served. `count_by_entry` is a count-only
/// query and never materializes rows.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Fetches the approved comments for an entry, oldest first.
    ///
    /// An entry is addressed by module, singular entry key and entry id
    /// together.
    async fn find_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<Vec<Comment>>;

    /// Counts the approved comments for an entry.
    async fn count_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<i64>;
}

/// Comment store backed by the PostgreSQL repository.
#[derive(Debug, Clone)]
pub struct PgCommentStore {
    client: PgClient,
}

impl PgCommentStore {
    /// Creates a store over a pooled database client.
    pub fn new(client: PgClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CommentStore for PgCommentStore {
    async fn find_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<Vec<Comment>> {
        let rows = self
            .client
            .find_comments_by_entry(
                module,
                entry_key,
                entry_id,
                Pagination::new(database::MAX_PAGE_SIZE, 0),
            )
            .await
            .map_err(CommentsError::store)?;

        Ok(rows
            .into_iter()
            .map(|(comment, account)| Comment::from_model(comment, account))
            .collect())
    }

    async fn count_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<i64> {
        self.client
            .count_comments_by_entry(module, entry_key, entry_id)
            .await
            .map_err(CommentsError::store)
    }
}

/// In-memory comment store for tests and single-process wiring.
#[derive(Debug, Default)]
pub struct MemoryStore {
    comments: RwLock<Vec<Comment>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a comment.
    pub fn push(&self, comment: Comment) {
        self.comments
            .write()
            .expect("store lock poisoned")
            .push(comment);
    }
}

#[async_trait]
impl CommentStore for MemoryStore {
    async fn find_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<Vec<Comment>> {
        let mut matches: Vec<Comment> = self
            .comments
            .read()
            .expect("store lock poisoned")
            .iter()
            .filter(|comment| {
                comment.module == module
                    && comment.entry_key == entry_key
                    && comment.entry_id == entry_id
            })
            .cloned()
            .collect();
        matches.sort_by_key(|comment| comment.created_at);

        Ok(matches)
    }

    async fn count_by_entry(
        &self,
        module: &str,
        entry_key: &str,
        entry_id: &str,
    ) -> CommentsResult<i64> {
        let count = self
            .comments
            .read()
            .expect("store lock poisoned")
            .iter()
            .filter(|comment| {
                comment.module == module
                    && comment.entry_key == entry_key
                    && comment.entry_id == entry_id
            })
            .count();

        Ok(count as i64)
    }
}
