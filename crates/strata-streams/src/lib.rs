#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for field collection operations.
pub const TRACING_TARGET_FIELDS: &str = "strata_streams::fields";

mod collection;
mod field;
pub mod types;

pub use crate::collection::FieldCollection;
pub use crate::field::Field;
pub use crate::types::{
    EntryContext, FieldTypeCollection, FieldTypeHandler, FieldTypeRegistry, InvalidValue,
};
