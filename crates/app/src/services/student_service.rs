//! Student service — use-cases for the student registry.

use roster_domain::error::{NotFoundError, RosterError};
use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};

use crate::ports::StudentRepository;

/// Application service for student operations.
pub struct StudentService<R> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new student after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    pub async fn create_student(&self, student: NewStudent) -> Result<Student, RosterError> {
        student.validate()?;
        let created = self.repo.create(student).await?;
        tracing::debug!(id = %created.id, "student created");
        Ok(created)
    }

    /// Look up a student by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::NotFound`] when no student with `id` exists,
    /// or a storage error from the repository.
    pub async fn get_student(&self, id: StudentId) -> Result<Student, RosterError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Student",
                id: id.to_string(),
            }
            .into()
        })
    }

    /// List all students in store order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_students(&self) -> Result<Vec<Student>, RosterError> {
        self.repo.get_all().await
    }

    /// Release the underlying store.
    pub async fn shutdown(&self) {
        self.repo.close().await;
        tracing::info!("student store released");
    }
}
