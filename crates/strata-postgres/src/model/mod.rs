//! Database models for all entities in the system.
//!
//! Each model module pairs a `Queryable` row struct with its `Insertable`
//! and `AsChangeset` companions, plus small domain helpers in the style
//! of builder methods (`with_*`) and predicates (`is_*`).

mod account;
mod comment;
mod stream_field;

pub use account::{Account, NewAccount};
pub use comment::{Comment, NewComment, UpdateComment};
pub use stream_field::{NewStreamField, StreamField, UpdateStreamField};
