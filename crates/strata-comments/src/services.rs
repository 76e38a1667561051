//! Collaborator container for the comment pipeline.

use std::sync::Arc;

use strata_core::crypto::EncryptionKey;
use strata_core::registry::{ModuleRegistry, StaticModules};
use strata_core::session::{FlashStore, MemoryFlash};
use strata_core::settings::{MemorySettings, SettingsStore};
use strata_core::view::ViewRenderer;
use strata_i18n::{StaticTranslations, TranslationSource};
use url::Url;

use crate::store::CommentStore;

/// Container for the collaborators the presenter depends on.
///
/// Holds every external service reached during comment display,
/// enabling dependency injection and one-place wiring per request. The
/// optional collaborators default to empty in-memory implementations so
/// minimal installations and tests only wire what they use.
#[derive(Clone)]
pub struct CommentServices {
    /// Comment persistence.
    pub store: Arc<dyn CommentStore>,
    /// View rendering.
    pub renderer: Arc<dyn ViewRenderer>,
    /// Translation tables for module namespaces.
    pub translations: Arc<dyn TranslationSource>,
    /// Site settings.
    pub settings: Arc<dyn SettingsStore>,
    /// Session flash storage.
    pub flash: Arc<dyn FlashStore>,
    /// Installed module registry.
    pub modules: Arc<dyn ModuleRegistry>,
    /// Process-wide key for the entry token.
    pub key: EncryptionKey,
    /// Base URL used for canonical profile links.
    pub site_url: Url,
    /// Path of the current request, the default entry URI.
    pub request_uri: String,
}

impl CommentServices {
    /// Creates a services container with the required collaborators.
    ///
    /// Settings, flash storage, module registry and translations start
    /// as empty in-memory implementations; replace them with `with_*`.
    pub fn new(
        store: Arc<dyn CommentStore>,
        renderer: Arc<dyn ViewRenderer>,
        key: EncryptionKey,
        site_url: Url,
    ) -> Self {
        Self {
            store,
            renderer,
            translations: Arc::new(StaticTranslations::new()),
            settings: Arc::new(MemorySettings::new()),
            flash: Arc::new(MemoryFlash::new()),
            modules: Arc::new(StaticModules::new()),
            key,
            site_url,
            request_uri: "/".to_owned(),
        }
    }

    /// Replaces the translation source.
    pub fn with_translations(mut self, translations: Arc<dyn TranslationSource>) -> Self {
        self.translations = translations;
        self
    }

    /// Replaces the settings store.
    pub fn with_settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the flash store.
    pub fn with_flash(mut self, flash: Arc<dyn FlashStore>) -> Self {
        self.flash = flash;
        self
    }

    /// Replaces the module registry.
    pub fn with_modules(mut self, modules: Arc<dyn ModuleRegistry>) -> Self {
        self.modules = modules;
        self
    }

    /// Sets the current request path.
    pub fn with_request_uri(mut self, request_uri: impl Into<String>) -> Self {
        self.request_uri = request_uri.into();
        self
    }
}

impl std::fmt::Debug for CommentServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommentServices")
            .field("site_url", &self.site_url.as_str())
            .field("request_uri", &self.request_uri)
            .finish_non_exhaustive()
    }
}
