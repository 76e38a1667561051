//! Mock collaborators for testing.
//!
//! The in-memory settings, flash, and module registry implementations in
//! their own modules double as test fixtures; the one collaborator that
//! needs a dedicated mock is the view renderer, which here records every
//! render call and echoes the view name plus data for assertions.
//!
//! # Feature Flag
//!
//! This module is only available when the `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! strata-core = { version = "...", features = ["test-utils"] }
//! ```

use std::sync::Mutex;

use crate::view::{ViewData, ViewError, ViewRenderer};

/// A single recorded render call.
#[derive(Debug, Clone)]
pub struct RenderedView {
    /// The view name that was requested.
    pub view: String,
    /// The data mapping handed to the renderer.
    pub data: ViewData,
}

/// View renderer that records calls and produces a deterministic body.
///
/// The rendered output is `<view>\n<data as JSON>`, which lets tests
/// assert on both the selected template and the shaped data without a
/// real template engine.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Mutex<Vec<RenderedView>>,
}

impl RecordingRenderer {
    /// Creates a renderer with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of all recorded render calls.
    pub fn calls(&self) -> Vec<RenderedView> {
        self.calls.lock().expect("render log poisoned").clone()
    }

    /// Returns the most recent render call, if any.
    pub fn last_call(&self) -> Option<RenderedView> {
        self.calls
            .lock()
            .expect("render log poisoned")
            .last()
            .cloned()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, view: &str, data: &ViewData) -> Result<String, ViewError> {
        self.calls
            .lock()
            .expect("render log poisoned")
            .push(RenderedView {
                view: view.to_owned(),
                data: data.clone(),
            });

        Ok(format!("{view}\n{data}"))
    }
}
