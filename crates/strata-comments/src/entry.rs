//! Entry reference the presenter binds to.

use crate::error::{CommentsError, CommentsResult};

/// Identifies the content item comments attach to.
///
/// `module`, `singular`, `plural` and `entry_id` together uniquely
/// address one commentable entry; `uri` is informational only and falls
/// back to the current request path when not supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Content-type namespace.
    pub module: String,
    /// Singular localization key for the item's category name.
    pub singular: String,
    /// Plural localization key for the item's category name.
    pub plural: String,
    /// Opaque entry identifier, auto-increment id or string alike.
    pub entry_id: String,
    /// Display title of the entry.
    pub title: Option<String>,
    /// Canonical location of the entry.
    pub uri: Option<String>,
}

impl Entry {
    /// Creates an entry reference from the required fields.
    pub fn new(
        module: impl Into<String>,
        singular: impl Into<String>,
        plural: impl Into<String>,
        entry_id: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            singular: singular.into(),
            plural: plural.into(),
            entry_id: entry_id.into(),
            title: None,
            uri: None,
        }
    }

    /// Sets the display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the canonical location.
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Checks the required fields are present.
    ///
    /// The presenter calls this at construction so a misconfigured
    /// caller fails fast instead of producing broken markup later.
    pub fn validate(&self) -> CommentsResult<()> {
        if self.module.is_empty() {
            return Err(CommentsError::MissingConfiguration { field: "module" });
        }
        if self.singular.is_empty() {
            return Err(CommentsError::MissingConfiguration { field: "singular" });
        }
        if self.plural.is_empty() {
            return Err(CommentsError::MissingConfiguration { field: "plural" });
        }

        Ok(())
    }
}
