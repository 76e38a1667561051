//! Session flash storage collaborator seam.
//!
//! Flash data lives for exactly one read: the comment form stashes a
//! rejected draft here so the next render can repopulate the textarea,
//! and reading the value clears it.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::TRACING_TARGET_SESSION;

/// One-shot session flash storage.
pub trait FlashStore: Send + Sync {
    /// Stores a flash value under `key`, replacing any previous value.
    fn flash(&self, key: &str, value: String);

    /// Removes and returns the flash value for `key`.
    fn take(&self, key: &str) -> Option<String>;
}

/// In-memory flash store backing a single session.
#[derive(Debug, Default)]
pub struct MemoryFlash {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryFlash {
    /// Creates an empty flash store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlashStore for MemoryFlash {
    fn flash(&self, key: &str, value: String) {
        self.values
            .lock()
            .expect("flash lock poisoned")
            .insert(key.to_owned(), value);
    }

    fn take(&self, key: &str) -> Option<String> {
        let value = self
            .values
            .lock()
            .expect("flash lock poisoned")
            .remove(key);

        tracing::debug!(
            target: TRACING_TARGET_SESSION,
            key,
            found = value.is_some(),
            "Flash value consumed"
        );

        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_consumes_value() {
        let flash = MemoryFlash::new();
        flash.flash("comment", "draft text".to_owned());

        assert_eq!(flash.take("comment").as_deref(), Some("draft text"));
        assert_eq!(flash.take("comment"), None);
    }

    #[test]
    fn test_flash_replaces_previous_value() {
        let flash = MemoryFlash::new();
        flash.flash("comment", "first".to_owned());
        flash.flash("comment", "second".to_owned());

        assert_eq!(flash.take("comment").as_deref(), Some("second"));
    }
}
