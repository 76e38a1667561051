//! View rendering collaborator seam.
//!
//! Rendering itself belongs to the host application's template engine;
//! the core hands over a view name plus a JSON data mapping and receives
//! markup back. The one piece of lookup logic that is part of the
//! contract lives here: an active theme may override any module view, so
//! resolution checks the theme's path before falling back to the views
//! bundled with the module.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::TRACING_TARGET_VIEW;

/// Data mapping handed to the template engine.
pub type ViewData = serde_json::Value;

/// Errors produced by view rendering.
#[derive(Debug, Error)]
pub enum ViewError {
    /// No template was found for the requested view name.
    #[error("template not found for view '{view}'")]
    TemplateNotFound {
        /// The view name that failed to resolve.
        view: String,
    },
    /// The template engine failed while rendering.
    #[error("render failed for view '{view}': {message}")]
    Render {
        /// The view name being rendered.
        view: String,
        /// Engine-reported failure.
        message: String,
    },
}

/// Renders a named view with a data mapping.
pub trait ViewRenderer: Send + Sync {
    /// Renders `view` with `data`, returning the produced markup.
    fn render(&self, view: &str, data: &ViewData) -> Result<String, ViewError>;
}

/// Theme-override-then-module-fallback view path resolution.
///
/// Mirrors the lookup contract of the host template loader: a view named
/// `display` for module `comments` resolves to
/// `<theme>/modules/comments/display.html` when the active theme ships an
/// override, and to `<module views dir>/display.html` otherwise. Caching
/// of resolved paths is left to the host.
#[derive(Debug, Clone, Default)]
pub struct ViewPaths {
    theme_dir: Option<PathBuf>,
    module_dirs: std::collections::HashMap<String, PathBuf>,
}

/// File extension appended to extension-less view names.
const VIEW_EXT: &str = "html";

impl ViewPaths {
    /// Creates a resolver with no theme and no modules registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the active theme directory.
    pub fn with_theme(mut self, dir: impl Into<PathBuf>) -> Self {
        self.theme_dir = Some(dir.into());
        self
    }

    /// Registers the bundled views directory for a module.
    pub fn with_module(mut self, module: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        self.module_dirs.insert(module.into(), dir.into());
        self
    }

    /// Resolves a view name for a module to a concrete template path.
    ///
    /// Returns `None` when neither the theme override nor the module
    /// bundle contains the view.
    pub fn resolve(&self, module: &str, view: &str) -> Option<PathBuf> {
        let file_name = Self::file_name(view);

        if let Some(theme_dir) = &self.theme_dir {
            let override_path = theme_dir.join("modules").join(module).join(&file_name);
            if override_path.exists() {
                tracing::debug!(
                    target: TRACING_TARGET_VIEW,
                    module,
                    view,
                    path = %override_path.display(),
                    "View resolved to theme override"
                );
                return Some(override_path);
            }
        }

        let module_path = self.module_dirs.get(module)?.join(&file_name);
        if module_path.exists() {
            tracing::debug!(
                target: TRACING_TARGET_VIEW,
                module,
                view,
                path = %module_path.display(),
                "View resolved to module bundle"
            );
            return Some(module_path);
        }

        None
    }

    fn file_name(view: &str) -> String {
        if Path::new(view).extension().is_some() {
            view.to_owned()
        } else {
            format!("{view}.{VIEW_EXT}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "template").unwrap();
    }

    #[test]
    fn test_theme_override_wins() {
        let tmp = tempfile::TempDir::new().unwrap();
        let theme = tmp.path().join("theme");
        let module = tmp.path().join("comments/views");

        touch(&theme.join("modules/comments/display.html"));
        touch(&module.join("display.html"));

        let paths = ViewPaths::new()
            .with_theme(&theme)
            .with_module("comments", &module);

        let resolved = paths.resolve("comments", "display").unwrap();
        assert!(resolved.starts_with(&theme));
    }

    #[test]
    fn test_falls_back_to_module_bundle() {
        let tmp = tempfile::TempDir::new().unwrap();
        let module = tmp.path().join("comments/views");
        touch(&module.join("form.html"));

        let paths = ViewPaths::new()
            .with_theme(tmp.path().join("theme"))
            .with_module("comments", &module);

        let resolved = paths.resolve("comments", "form").unwrap();
        assert!(resolved.starts_with(&module));
    }

    #[test]
    fn test_missing_view_resolves_to_none() {
        let paths = ViewPaths::new();
        assert_eq!(paths.resolve("comments", "display"), None);
    }

    #[test]
    fn test_explicit_extension_is_preserved() {
        let tmp = tempfile::TempDir::new().unwrap();
        let module = tmp.path().join("comments/views");
        touch(&module.join("feed.xml"));

        let paths = ViewPaths::new().with_module("comments", &module);
        let resolved = paths.resolve("comments", "feed.xml").unwrap();
        assert!(resolved.ends_with("feed.xml"));
    }
}
