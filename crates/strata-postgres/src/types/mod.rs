//! Contains constraints, enumerations and other custom types.

pub mod constants;
mod constraints;
mod enums;

pub use constraints::{
    AccountConstraints, CommentConstraints, ConstraintViolation, StreamFieldConstraints,
};
pub use enums::CommentStatus;
