//! Comment model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::comments;
use crate::types::CommentStatus;
use crate::types::constants::comment;

/// Comment model representing reader discussion on a content entry.
///
/// The entry's localization keys (`entry_key`, `entry_plural`) and title
/// are copied onto the row at creation time, so a comment stays
/// renderable even when the owning module no longer resolves them.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Comment {
    /// Unique comment identifier.
    pub id: Uuid,
    /// Content-type namespace the entry belongs to.
    pub module: String,
    /// Opaque identifier of the entry within its module.
    pub entry_id: String,
    /// Singular localization key copied from the entry.
    pub entry_key: String,
    /// Plural localization key copied from the entry.
    pub entry_plural: String,
    /// Entry title copied at creation time.
    pub entry_title: Option<String>,
    /// Reference to the authoring account (NULL for guest comments).
    pub user_id: Option<Uuid>,
    /// Guest author name when no account is attached.
    pub author_name: Option<String>,
    /// Guest author email when no account is attached.
    pub author_email: Option<String>,
    /// Author-supplied website.
    pub website: Option<String>,
    /// Comment text content.
    pub body: String,
    /// Moderation status.
    pub status: CommentStatus,
    /// Timestamp when the comment was created.
    pub created_at: Timestamp,
    /// Timestamp when the comment was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new comment.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewComment {
    /// Content-type namespace.
    pub module: String,
    /// Opaque entry identifier.
    pub entry_id: String,
    /// Singular localization key copied from the entry.
    pub entry_key: String,
    /// Plural localization key copied from the entry.
    pub entry_plural: String,
    /// Entry title copied from the entry.
    pub entry_title: Option<String>,
    /// Authoring account.
    pub user_id: Option<Uuid>,
    /// Guest author name.
    pub author_name: Option<String>,
    /// Guest author email.
    pub author_email: Option<String>,
    /// Author-supplied website.
    pub website: Option<String>,
    /// Comment text content.
    pub body: String,
    /// Moderation status; defaults to pending when omitted.
    pub status: Option<CommentStatus>,
}

/// Data for updating a comment.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateComment {
    /// Comment text content.
    pub body: Option<String>,
    /// Author-supplied website.
    pub website: Option<String>,
    /// Moderation status.
    pub status: Option<CommentStatus>,
}

impl Comment {
    /// Returns whether this comment was left without an account.
    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    /// Returns whether this comment is publicly visible.
    pub fn is_approved(&self) -> bool {
        self.status.is_visible()
    }

    /// Returns whether this comment has been edited.
    pub fn is_edited(&self) -> bool {
        let duration =
            jiff::Timestamp::from(self.updated_at) - jiff::Timestamp::from(self.created_at);
        duration.get_seconds() > comment::EDIT_GRACE_PERIOD_SECONDS
    }
}

impl NewComment {
    /// Creates a new comment on an entry.
    ///
    /// `entry_key` and `entry_plural` are the entry's localization keys,
    /// captured here because rows must carry them from creation onward.
    pub fn for_entry(
        module: impl Into<String>,
        entry_id: impl Into<String>,
        entry_key: impl Into<String>,
        entry_plural: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            entry_id: entry_id.into(),
            entry_key: entry_key.into(),
            entry_plural: entry_plural.into(),
            body: body.into(),
            ..Default::default()
        }
    }

    /// Sets the entry title snapshot.
    pub fn with_entry_title(mut self, entry_title: impl Into<String>) -> Self {
        self.entry_title = Some(entry_title.into());
        self
    }

    /// Attributes the comment to an account.
    pub fn with_author(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Attributes the comment to a guest.
    pub fn with_guest(
        mut self,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
    ) -> Self {
        self.author_name = Some(author_name.into());
        self.author_email = Some(author_email.into());
        self
    }

    /// Sets the author-supplied website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// Sets an explicit moderation status.
    pub fn with_status(mut self, status: CommentStatus) -> Self {
        self.status = Some(status);
        self
    }
}
