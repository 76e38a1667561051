//! The comment presenter.

use strata_i18n::{Catalog, comments_namespace, humanize};

use crate::TRACING_TARGET_PRESENTER;
use crate::entry::Entry;
use crate::error::CommentsResult;
use crate::process::process;
use crate::services::CommentServices;
use crate::token::EntryToken;

/// View name for the comment list.
pub const DISPLAY_VIEW: &str = "comments/display";

/// View name for the submission form.
pub const FORM_VIEW: &str = "comments/form";

/// Flash key holding a previously rejected comment draft.
pub const FLASH_COMMENT_KEY: &str = "comment";

/// Localization key for the one-comment counter template.
const COUNTER_SINGULAR_KEY: &str = "comments:counter_singular_label";

/// Localization key for the many-comments counter template.
const COUNTER_PLURAL_KEY: &str = "comments:counter_plural_label";

/// Presenter bound to one commentable entry.
///
/// Construction validates the entry reference and loads the comments
/// module's own language lines into a request-scoped catalog; everything
/// else is reached through [`CommentServices`].
#[derive(Debug)]
pub struct Comments {
    services: CommentServices,
    catalog: Catalog,
    entry: Entry,
    entry_uri: String,
    count: i64,
}

impl Comments {
    /// Creates a presenter for an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CommentsError::MissingConfiguration`] when a required
    /// entry field (module, singular, plural) is absent.
    ///
    /// [`CommentsError::MissingConfiguration`]: crate::CommentsError::MissingConfiguration
    pub fn new(services: CommentServices, entry: Entry) -> CommentsResult<Self> {
        entry.validate()?;

        let entry_uri = entry
            .uri
            .clone()
            .unwrap_or_else(|| services.request_uri.clone());
        let catalog = Catalog::with_namespace("comments", comments_namespace());

        Ok(Self {
            services,
            catalog,
            entry,
            entry_uri,
            count: 0,
        })
    }

    /// Returns the bound entry reference.
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    /// Renders the comment list for the bound entry.
    ///
    /// Fetches the approved comments, runs the enrichment pipeline once
    /// and hands the shaped batch to the display view.
    #[tracing::instrument(
        skip(self),
        target = TRACING_TARGET_PRESENTER,
        fields(module = %self.entry.module, entry_id = %self.entry.entry_id)
    )]
    pub async fn display(&self) -> CommentsResult<String> {
        let mut comments = self
            .services
            .store
            .find_by_entry(&self.entry.module, &self.entry.singular, &self.entry.entry_id)
            .await?;

        tracing::debug!(
            target: TRACING_TARGET_PRESENTER,
            comment_count = comments.len(),
            "Comments fetched"
        );

        process(&mut comments, &self.catalog, &self.services);

        let data = serde_json::json!({
            "module": self.entry.module,
            "entry_title": self.entry.title,
            "comments": comments,
        });

        Ok(self.services.renderer.render(DISPLAY_VIEW, &data)?)
    }

    /// Renders the submission form for the bound entry.
    ///
    /// The form carries the encoded entry token and any comment draft
    /// flashed by a rejected submission; reading the draft clears it.
    #[tracing::instrument(
        skip(self),
        target = TRACING_TARGET_PRESENTER,
        fields(module = %self.entry.module, entry_id = %self.entry.entry_id)
    )]
    pub async fn form(&self) -> CommentsResult<String> {
        let data = serde_json::json!({
            "module": self.entry.module,
            "entry_hash": self.entry_token()?,
            "comment": self.services.flash.take(FLASH_COMMENT_KEY),
        });

        Ok(self.services.renderer.render(FORM_VIEW, &data)?)
    }

    /// Counts the approved comments for the bound entry.
    ///
    /// A count-only query; the result is cached on the presenter for
    /// [`count_string`].
    ///
    /// [`count_string`]: Comments::count_string
    pub async fn count(&mut self) -> CommentsResult<i64> {
        let count = self
            .services
            .store
            .count_by_entry(&self.entry.module, &self.entry.singular, &self.entry.entry_id)
            .await?;
        self.count = count;

        Ok(count)
    }

    /// Formats the localized comment counter.
    ///
    /// Uses the supplied count, or the cached one from [`count`] (0 if
    /// never fetched). The singular template is selected exactly when
    /// the effective count is 1; a missing template degrades to the
    /// humanized key.
    ///
    /// [`count`]: Comments::count
    pub fn count_string(&self, count: Option<i64>) -> String {
        let total = count.unwrap_or(self.count);
        let key = if total == 1 {
            COUNTER_SINGULAR_KEY
        } else {
            COUNTER_PLURAL_KEY
        };

        let template = self.catalog.lookup(key).unwrap_or_else(|| humanize(key));
        template.replace("{count}", &total.to_string())
    }

    /// Encodes the entry identity into an opaque, form-safe token.
    pub fn entry_token(&self) -> CommentsResult<String> {
        let token = EntryToken::from_entry(&self.entry, self.entry_uri.as_str());
        Ok(token.encode(&self.services.key)?)
    }
}
