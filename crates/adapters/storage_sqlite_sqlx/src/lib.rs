//! # roster-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `StudentRepository` port defined in `roster-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle, including release on shutdown
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod error;
mod pool;
mod student_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use student_repo::SqliteStudentRepository;
