//! Convenient re-exports for common use.

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
pub use crate::escape::escape_view_text;
pub use crate::registry::ModuleRegistry;
pub use crate::session::FlashStore;
pub use crate::settings::SettingsStore;
pub use crate::view::{ViewData, ViewError, ViewRenderer};
