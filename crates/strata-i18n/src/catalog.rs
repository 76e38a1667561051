//! Translation catalog and namespace loading.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::TRACING_TARGET_CATALOG;

/// Provides translation tables for module namespaces.
///
/// A namespace is a module name; its table maps fully-qualified keys
/// (`"comments:counter_plural_label"`) to translated strings. Sources
/// return `None` for namespaces they do not ship language lines for.
pub trait TranslationSource: Send + Sync {
    /// Returns the translation table for `namespace`, if one exists.
    fn load(&self, namespace: &str) -> Option<HashMap<String, String>>;
}

/// Fixed translation source assembled at wiring time.
#[derive(Debug, Default)]
pub struct StaticTranslations {
    namespaces: HashMap<String, HashMap<String, String>>,
}

impl StaticTranslations {
    /// Creates a source with no namespaces.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a namespace table, returning self for chained construction.
    pub fn with_table<K, V>(
        mut self,
        namespace: impl Into<String>,
        entries: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.namespaces.insert(
            namespace.into(),
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }
}

impl TranslationSource for StaticTranslations {
    fn load(&self, namespace: &str) -> Option<HashMap<String, String>> {
        self.namespaces.get(namespace).cloned()
    }
}

/// The English language lines bundled with the comments module.
///
/// Counter templates carry a `{count}` placeholder substituted by the
/// presenter.
pub fn comments_namespace() -> HashMap<String, String> {
    [
        ("comments:counter_singular_label", "{count} comment"),
        ("comments:counter_plural_label", "{count} comments"),
        ("comments:no_comments_label", "There are no comments yet."),
        ("comments:your_comment_label", "Your comment"),
        ("comments:website_label", "Website"),
        ("comments:submit_label", "Submit comment"),
        ("comments:awaiting_moderation_label", "Your comment is awaiting moderation."),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect()
}

/// Request-scoped translation catalog.
///
/// Namespaces are merged in through [`load_namespace`], which is
/// idempotent: a namespace is consulted against the source at most once
/// per catalog, whether or not the source had a table for it.
///
/// [`load_namespace`]: Catalog::load_namespace
#[derive(Default)]
pub struct Catalog {
    entries: RwLock<HashMap<String, String>>,
    loaded: RwLock<HashSet<String>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog with a namespace already merged in.
    pub fn with_namespace(
        namespace: impl Into<String>,
        entries: HashMap<String, String>,
    ) -> Self {
        let catalog = Self::new();
        let namespace = namespace.into();
        catalog
            .entries
            .write()
            .expect("catalog lock poisoned")
            .extend(entries);
        catalog
            .loaded
            .write()
            .expect("catalog lock poisoned")
            .insert(namespace);
        catalog
    }

    /// Returns the translated string for `key`, if present.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .expect("catalog lock poisoned")
            .get(key)
            .cloned()
    }

    /// Merges a module's translation table into the catalog.
    ///
    /// No-op when the namespace was already loaded or the source has no
    /// table for it; both outcomes are memoized so the source is asked
    /// at most once per namespace.
    pub fn load_namespace(&self, namespace: &str, source: &dyn TranslationSource) {
        {
            let loaded = self.loaded.read().expect("catalog lock poisoned");
            if loaded.contains(namespace) {
                return;
            }
        }

        let table = source.load(namespace);
        match &table {
            Some(entries) => {
                tracing::debug!(
                    target: TRACING_TARGET_CATALOG,
                    namespace,
                    entries = entries.len(),
                    "Translation namespace loaded"
                );
            }
            None => {
                tracing::debug!(
                    target: TRACING_TARGET_CATALOG,
                    namespace,
                    "Translation namespace absent"
                );
            }
        }

        if let Some(entries) = table {
            self.entries
                .write()
                .expect("catalog lock poisoned")
                .extend(entries);
        }
        self.loaded
            .write()
            .expect("catalog lock poisoned")
            .insert(namespace.to_owned());
    }

    /// Returns whether a namespace has been consulted already.
    pub fn is_loaded(&self, namespace: &str) -> bool {
        self.loaded
            .read()
            .expect("catalog lock poisoned")
            .contains(namespace)
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.read().expect("catalog lock poisoned");
        let loaded = self.loaded.read().expect("catalog lock poisoned");
        f.debug_struct("Catalog")
            .field("entries", &entries.len())
            .field("loaded", &loaded.len())
            .finish()
    }
}
