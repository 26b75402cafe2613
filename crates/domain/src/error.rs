//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`RosterError`]
//! via `From`, so that handlers only ever match on this enum.

use std::error::Error;

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// Any failure raised by a storage backend (connectivity, constraint, decode).
    #[error("storage error")]
    Storage(#[source] Box<dyn Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    /// A field carried a value of a shape the record cannot hold.
    #[error("{0} has an unsupported value")]
    InvalidField(&'static str),
}

/// A lookup by identifier matched nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable resource name, e.g. `"Student"`.
    pub entity: &'static str,
    /// The identifier that was looked up.
    pub id: String,
}
