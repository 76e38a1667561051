//! Site settings collaborator seam.
//!
//! The CMS keeps site-wide switches (public profiles, comment moderation
//! defaults) in a settings service owned by the host application. This
//! module defines the read contract the core depends on, plus an
//! in-memory implementation used for wiring and tests.

use std::collections::HashMap;
use std::sync::RwLock;

/// Settings key for the public-profiles switch.
pub const ENABLE_PROFILES: &str = "enable_profiles";

/// Read access to site settings.
pub trait SettingsStore: Send + Sync {
    /// Returns the raw setting value for `key`, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns a boolean interpretation of the setting.
    ///
    /// Absent keys and unrecognized values read as `false`.
    fn get_bool(&self, key: &str) -> bool {
        matches!(
            self.get(key).as_deref(),
            Some("1") | Some("true") | Some("yes") | Some("on")
        )
    }
}

/// In-memory settings store.
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, String>>,
}

impl MemorySettings {
    /// Creates an empty settings store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a value, returning self for chained construction.
    pub fn with(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a value.
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .write()
            .expect("settings lock poisoned")
            .insert(key.into(), value.into());
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .expect("settings lock poisoned")
            .get(key)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_bool_interpretations() {
        let settings = MemorySettings::new()
            .with(ENABLE_PROFILES, "1")
            .with("comments_moderated", "no");

        assert!(settings.get_bool(ENABLE_PROFILES));
        assert!(!settings.get_bool("comments_moderated"));
        assert!(!settings.get_bool("missing_key"));
    }

    #[test]
    fn test_get_returns_raw_value() {
        let settings = MemorySettings::new().with("site_name", "Example");
        assert_eq!(settings.get("site_name").as_deref(), Some("Example"));
        assert_eq!(settings.get("other"), None);
    }
}
