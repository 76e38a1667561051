//! Convenient re-exports for common use.

pub use crate::model::{
    Account, Comment, NewAccount, NewComment, NewStreamField, StreamField, UpdateComment,
    UpdateStreamField,
};
pub use crate::query::{CommentRepository, Pagination, StreamFieldRepository};
pub use crate::types::{CommentStatus, ConstraintViolation};
pub use crate::{PgClient, PgConfig, PgConn, PgError, PgResult};
