//! Account model for registered users.

use diesel::prelude::*;
use jiff_diesel::Timestamp;
use uuid::Uuid;

use crate::schema::accounts;

/// Account model representing a registered user.
///
/// Comments reference accounts for authorship; the username feeds the
/// public profile URL when profiles are enabled.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login and profile name.
    pub username: String,
    /// Optional display name shown instead of the username.
    pub display_name: Option<String>,
    /// Unique contact email.
    pub email: String,
    /// Optional personal website.
    pub website: Option<String>,
    /// Timestamp when the account was created.
    pub created_at: Timestamp,
    /// Timestamp when the account was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new account.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewAccount {
    /// Unique login and profile name.
    pub username: String,
    /// Optional display name.
    pub display_name: Option<String>,
    /// Unique contact email.
    pub email: String,
    /// Optional personal website.
    pub website: Option<String>,
}

impl Account {
    /// Returns the name to display for this account.
    pub fn visible_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }
}

impl NewAccount {
    /// Creates a new account with the required fields.
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the personal website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_name_prefers_display_name() {
        let new_account = NewAccount::new("phil", "phil@example.com").with_display_name("Phil S.");
        assert_eq!(new_account.display_name.as_deref(), Some("Phil S."));
        assert_eq!(new_account.username, "phil");
    }
}
