//! Database constraint violations organized by functional area.
//!
//! Maps the constraint names defined in the migrations to typed variants
//! so callers can turn a raw database error into a user-facing message.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Constraint violations on the `accounts` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountConstraints {
    /// Username already taken.
    UsernameTaken,
    /// Email already registered.
    EmailTaken,
    /// Username outside the allowed length.
    UsernameLength,
}

/// Constraint violations on the `comments` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentConstraints {
    /// Body is empty or over the maximum length.
    BodyLength,
    /// Neither an account nor a guest name was supplied.
    MissingAuthor,
}

/// Constraint violations on the `stream_fields` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamFieldConstraints {
    /// Slug already used within the namespace.
    SlugTaken,
    /// Slug contains characters outside `[a-z0-9_]`.
    SlugFormat,
}

/// Unified constraint violation enum that can represent any database constraint.
///
/// This enum wraps all specific constraint types, providing a single
/// interface for handling any constraint violation while keeping the
/// per-table enums usable on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintViolation {
    /// Account-related constraint.
    Account(AccountConstraints),
    /// Comment-related constraint.
    Comment(CommentConstraints),
    /// Stream-field-related constraint.
    StreamField(StreamFieldConstraints),
}

impl ConstraintViolation {
    /// Maps a raw constraint name reported by PostgreSQL to a typed violation.
    ///
    /// Returns `None` for constraint names this crate does not define.
    pub fn new(constraint_name: &str) -> Option<Self> {
        let violation = match constraint_name {
            "accounts_username_key" => Self::Account(AccountConstraints::UsernameTaken),
            "accounts_email_key" => Self::Account(AccountConstraints::EmailTaken),
            "accounts_username_length_check" => Self::Account(AccountConstraints::UsernameLength),
            "comments_body_length_check" => Self::Comment(CommentConstraints::BodyLength),
            "comments_author_check" => Self::Comment(CommentConstraints::MissingAuthor),
            "stream_fields_namespace_slug_key" => {
                Self::StreamField(StreamFieldConstraints::SlugTaken)
            }
            "stream_fields_slug_format_check" => {
                Self::StreamField(StreamFieldConstraints::SlugFormat)
            }
            _ => return None,
        };

        Some(violation)
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(AccountConstraints::UsernameTaken) => {
                write!(f, "username is already taken")
            }
            Self::Account(AccountConstraints::EmailTaken) => {
                write!(f, "email is already registered")
            }
            Self::Account(AccountConstraints::UsernameLength) => {
                write!(f, "username must be between 2 and 64 characters")
            }
            Self::Comment(CommentConstraints::BodyLength) => {
                write!(f, "comment body must be between 1 and 4000 characters")
            }
            Self::Comment(CommentConstraints::MissingAuthor) => {
                write!(f, "comment needs an account or a guest name")
            }
            Self::StreamField(StreamFieldConstraints::SlugTaken) => {
                write!(f, "field slug is already used in this namespace")
            }
            Self::StreamField(StreamFieldConstraints::SlugFormat) => {
                write!(f, "field slug may only contain lowercase letters, digits and underscores")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_constraints_map() {
        assert_eq!(
            ConstraintViolation::new("comments_body_length_check"),
            Some(ConstraintViolation::Comment(CommentConstraints::BodyLength))
        );
        assert_eq!(
            ConstraintViolation::new("stream_fields_namespace_slug_key"),
            Some(ConstraintViolation::StreamField(
                StreamFieldConstraints::SlugTaken
            ))
        );
    }

    #[test]
    fn test_unknown_constraint_is_none() {
        assert_eq!(ConstraintViolation::new("somebody_elses_constraint"), None);
    }
}
