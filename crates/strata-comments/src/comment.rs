//! Display-side comment entity.

use jiff::Timestamp;
use serde::Serialize;
use strata_postgres::model;
use uuid::Uuid;

/// The authoring account of a non-anonymous comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentAuthor {
    /// Account identifier.
    pub id: Uuid,
    /// Profile username, feeds the canonical profile URL.
    pub username: String,
}

/// A comment shaped for display.
///
/// Comes out of the store carrying the raw persisted values; the
/// enrichment pipeline then fills `singular`/`plural` with resolved
/// labels and escapes the free-text fields exactly once per fetch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// Content-type namespace of the entry.
    pub module: String,
    /// Opaque entry identifier.
    pub entry_id: String,
    /// Singular localization key copied from the entry at creation time.
    pub entry_key: String,
    /// Plural localization key copied from the entry at creation time.
    pub entry_plural: String,
    /// Entry title snapshot.
    pub entry_title: Option<String>,
    /// Authoring account; `None` for guest comments.
    pub author: Option<CommentAuthor>,
    /// Guest author name.
    pub author_name: Option<String>,
    /// Author website, possibly overridden with the profile URL.
    pub website: Option<String>,
    /// Comment text.
    pub body: String,
    /// Resolved singular category label; set by enrichment.
    pub singular: Option<String>,
    /// Resolved plural category label; set by enrichment.
    pub plural: Option<String>,
    /// Creation time.
    pub created_at: Timestamp,
}

impl Comment {
    /// Creates an unenriched comment; wiring and test helper.
    pub fn new(
        module: impl Into<String>,
        entry_id: impl Into<String>,
        entry_key: impl Into<String>,
        entry_plural: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            module: module.into(),
            entry_id: entry_id.into(),
            entry_key: entry_key.into(),
            entry_plural: entry_plural.into(),
            entry_title: None,
            author: None,
            author_name: None,
            website: None,
            body: body.into(),
            singular: None,
            plural: None,
            created_at: Timestamp::now(),
        }
    }

    /// Attributes the comment to an account.
    pub fn with_author(mut self, id: Uuid, username: impl Into<String>) -> Self {
        self.author = Some(CommentAuthor {
            id,
            username: username.into(),
        });
        self
    }

    /// Sets the guest author name.
    pub fn with_author_name(mut self, author_name: impl Into<String>) -> Self {
        self.author_name = Some(author_name.into());
        self
    }

    /// Sets the author website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets the entry title snapshot.
    pub fn with_entry_title(mut self, entry_title: impl Into<String>) -> Self {
        self.entry_title = Some(entry_title.into());
        self
    }

    /// Sets the creation time.
    pub fn with_created_at(mut self, created_at: Timestamp) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns whether this comment was left without an account.
    pub fn is_anonymous(&self) -> bool {
        self.author.is_none()
    }

    /// Maps a persisted row and its joined account into the display shape.
    pub fn from_model(comment: model::Comment, account: Option<model::Account>) -> Self {
        Self {
            id: comment.id,
            module: comment.module,
            entry_id: comment.entry_id,
            entry_key: comment.entry_key,
            entry_plural: comment.entry_plural,
            entry_title: comment.entry_title,
            author: account.map(|account| CommentAuthor {
                id: account.id,
                username: account.username,
            }),
            author_name: comment.author_name,
            website: comment.website,
            body: comment.body,
            singular: None,
            plural: None,
            created_at: comment.created_at.into(),
        }
    }
}
