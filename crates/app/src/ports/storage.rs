//! Storage port — repository trait for student persistence.

use std::future::Future;

use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};

/// Repository for persisting and querying [`Student`]s.
///
/// Implementations assign identifiers on [`create`](Self::create) and
/// define the order returned by [`get_all`](Self::get_all).
pub trait StudentRepository {
    /// Persist a new student and return it with its assigned identifier.
    fn create(
        &self,
        student: NewStudent,
    ) -> impl Future<Output = Result<Student, RosterError>> + Send;

    /// Get a student by its unique identifier.
    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RosterError>> + Send;

    /// Get all students in the store's defined order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send;

    /// Release any held connection. Called once, at process shutdown.
    fn close(&self) -> impl Future<Output = ()> + Send;
}
