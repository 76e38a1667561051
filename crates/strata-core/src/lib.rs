#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for view resolution operations.
pub const TRACING_TARGET_VIEW: &str = "strata_core::view";

/// Tracing target for session flash operations.
pub const TRACING_TARGET_SESSION: &str = "strata_core::session";

mod error;

pub mod crypto;
pub mod escape;
pub mod prelude;
pub mod registry;
pub mod session;
pub mod settings;
pub mod view;

#[cfg(feature = "test-utils")]
#[cfg_attr(docsrs, doc(cfg(feature = "test-utils")))]
pub mod mock;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
