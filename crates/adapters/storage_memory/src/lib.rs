//! # roster-adapter-storage-memory
//!
//! In-process persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `StudentRepository` port over an ordered in-memory sequence
//! - Assign identifiers on creation
//! - Provide the demo seed data the service starts with
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits) and `roster-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod seed;
mod student_repo;

pub use seed::demo_students;
pub use student_repo::InMemoryStudentRepository;
