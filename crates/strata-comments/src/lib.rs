#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for presenter operations.
pub const TRACING_TARGET_PRESENTER: &str = "strata_comments::presenter";

/// Tracing target for the enrichment pipeline.
pub const TRACING_TARGET_PROCESS: &str = "strata_comments::process";

mod comment;
mod entry;
mod error;
mod presenter;
mod process;
mod services;
mod store;
mod token;

pub use crate::comment::{Comment, CommentAuthor};
pub use crate::entry::Entry;
pub use crate::error::{CommentsError, CommentsResult};
pub use crate::presenter::{Comments, DISPLAY_VIEW, FLASH_COMMENT_KEY, FORM_VIEW};
pub use crate::services::CommentServices;
pub use crate::store::{CommentStore, MemoryStore, PgCommentStore};
pub use crate::token::{EntryToken, TokenError};
