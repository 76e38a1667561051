//! Module registry collaborator seam.
//!
//! The host application tracks which content modules are installed; the
//! core only ever needs an existence check before loading a module's
//! translation namespace.

use std::collections::HashSet;

/// Lookup into the set of installed content modules.
pub trait ModuleRegistry: Send + Sync {
    /// Returns whether the named module is installed.
    fn exists(&self, module: &str) -> bool;
}

/// Fixed module registry built at wiring time.
#[derive(Debug, Default)]
pub struct StaticModules {
    modules: HashSet<String>,
}

impl StaticModules {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a module, returning self for chained construction.
    pub fn with_module(mut self, module: impl Into<String>) -> Self {
        self.modules.insert(module.into());
        self
    }
}

impl<S: Into<String>> FromIterator<S> for StaticModules {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            modules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl ModuleRegistry for StaticModules {
    fn exists(&self, module: &str) -> bool {
        self.modules.contains(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        let registry = StaticModules::new().with_module("blog").with_module("pages");

        assert!(registry.exists("blog"));
        assert!(!registry.exists("gallery"));
    }

    #[test]
    fn test_from_iter() {
        let registry: StaticModules = ["blog", "shop"].into_iter().collect();
        assert!(registry.exists("shop"));
    }
}
