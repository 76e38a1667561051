//! Constants used throughout the application.

/// Database-related constants.
pub mod database {
    /// Default pagination limit.
    pub const DEFAULT_PAGE_SIZE: i64 = 50;

    /// Maximum pagination limit.
    pub const MAX_PAGE_SIZE: i64 = 1000;
}

/// Constants related to comments and discussions.
pub mod comment {
    /// Number of seconds of grace period for detecting comment edits.
    pub const EDIT_GRACE_PERIOD_SECONDS: i64 = 5;

    /// Maximum comment body length in characters, matched by the check
    /// constraint on the table.
    pub const MAX_BODY_LENGTH: usize = 4000;
}

/// Constants related to content streams.
pub mod streams {
    /// Columns every stream entry table carries regardless of its field
    /// schema. Slug-set operations union these with the defined field
    /// slugs.
    pub const STANDARD_COLUMNS: &[&str] =
        &["id", "created_at", "updated_at", "created_by", "ordering_count"];
}
