//! Database enumeration types for type-safe queries.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the moderation status of a comment.
///
/// This enumeration corresponds to the `comment_status` PostgreSQL enum.
/// New comments start as pending; only approved comments reach the
/// display pipeline.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::CommentStatus"]
pub enum CommentStatus {
    /// Comment is awaiting moderation
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    #[default]
    Pending,

    /// Comment has been approved and is publicly visible
    #[db_rename = "approved"]
    #[serde(rename = "approved")]
    #[strum(serialize = "approved")]
    Approved,

    /// Comment was flagged as spam and is hidden
    #[db_rename = "spam"]
    #[serde(rename = "spam")]
    #[strum(serialize = "spam")]
    Spam,
}

impl CommentStatus {
    /// Returns whether comments with this status are publicly visible.
    #[inline]
    pub fn is_visible(self) -> bool {
        matches!(self, CommentStatus::Approved)
    }

    /// Returns whether this status still awaits a moderation decision.
    #[inline]
    pub fn is_pending(self) -> bool {
        matches!(self, CommentStatus::Pending)
    }

    /// Returns whether the comment was rejected.
    #[inline]
    pub fn is_rejected(self) -> bool {
        matches!(self, CommentStatus::Spam)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_default_is_pending() {
        assert_eq!(CommentStatus::default(), CommentStatus::Pending);
        assert!(CommentStatus::default().is_pending());
    }

    #[test]
    fn test_display_and_parse_roundtrip() {
        for status in [
            CommentStatus::Pending,
            CommentStatus::Approved,
            CommentStatus::Spam,
        ] {
            let parsed = CommentStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_only_approved_is_visible() {
        assert!(CommentStatus::Approved.is_visible());
        assert!(!CommentStatus::Pending.is_visible());
        assert!(!CommentStatus::Spam.is_visible());
    }
}
