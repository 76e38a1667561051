#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for catalog load operations.
pub const TRACING_TARGET_CATALOG: &str = "strata_i18n::catalog";

mod catalog;
mod humanize;

pub use crate::catalog::{Catalog, StaticTranslations, TranslationSource, comments_namespace};
pub use crate::humanize::humanize;
