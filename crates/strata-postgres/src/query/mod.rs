//! Database query repositories for all entities in the system.
//!
//! This module contains repository traits implemented on [`PgClient`],
//! encapsulating common query patterns behind type-safe interfaces.
//!
//! # Pagination
//!
//! All queries that may return large result sets use the [`Pagination`]
//! struct to provide consistent, bounded pagination across the system.
//!
//! [`PgClient`]: crate::PgClient

pub mod comment;
pub mod stream_field;

pub use comment::CommentRepository;
use serde::{Deserialize, Serialize};
pub use stream_field::StreamFieldRepository;

use crate::types::constants::database;

/// Pagination parameters for database queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Pagination {
    /// Creates a new pagination instance.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            // Ensure limit is between 1 and the configured maximum
            limit: limit.clamp(1, database::MAX_PAGE_SIZE),
            // Ensure offset is non-negative
            offset: offset.max(0),
        }
    }

    /// Creates pagination from page number and page size.
    pub fn from_page(page: i64, page_size: i64) -> Self {
        let page = page.max(1);
        let page_size = page_size.clamp(1, database::MAX_PAGE_SIZE);
        Self::new(page_size, (page - 1) * page_size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(database::DEFAULT_PAGE_SIZE, 0)
    }
}
