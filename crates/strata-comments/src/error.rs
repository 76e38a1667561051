//! Error types for the comment pipeline.

use strata_core::BoxedError;
use strata_core::view::ViewError;
use thiserror::Error;

use crate::token::TokenError;

/// Result type for comment pipeline operations.
pub type CommentsResult<T> = std::result::Result<T, CommentsError>;

/// Errors surfaced by the comment presenter and its collaborators.
///
/// Localization misses never show up here: a missing language line
/// degrades to a humanized key instead of erroring. Collaborator
/// failures propagate unmodified; the presenter retries nothing.
#[derive(Debug, Error)]
pub enum CommentsError {
    /// A required construction field was absent or empty.
    #[error("missing required configuration field '{field}'")]
    MissingConfiguration {
        /// Name of the absent field.
        field: &'static str,
    },

    /// The entry token failed to encode or decode.
    #[error("entry token error: {0}")]
    Token(#[from] TokenError),

    /// The comment store failed.
    #[error("comment store error: {0}")]
    Store(#[source] BoxedError),

    /// The view renderer failed.
    #[error("view render error: {0}")]
    Render(#[from] ViewError),
}

impl CommentsError {
    /// Wraps a store failure.
    pub fn store(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(source))
    }
}
