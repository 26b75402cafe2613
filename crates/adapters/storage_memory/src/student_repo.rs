//! In-memory implementation of [`StudentRepository`].

use std::future::Future;
use std::sync::Arc;

use tokio::sync::RwLock;

use roster_app::ports::StudentRepository;
use roster_domain::error::RosterError;
use roster_domain::id::StudentId;
use roster_domain::student::{NewStudent, Student};

/// Ordered, process-lifetime student store.
///
/// Students are kept in insertion order, which is the order returned by
/// [`get_all`](StudentRepository::get_all). New identifiers are one past the
/// highest identifier currently stored.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStudentRepository {
    students: Arc<RwLock<Vec<Student>>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `students`, kept in the given order.
    #[must_use]
    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            students: Arc::new(RwLock::new(students)),
        }
    }
}

fn next_id(students: &[Student]) -> StudentId {
    students
        .iter()
        .map(|s| s.id)
        .max()
        .map_or(StudentId::new(1), StudentId::next)
}

impl StudentRepository for InMemoryStudentRepository {
    fn create(
        &self,
        student: NewStudent,
    ) -> impl Future<Output = Result<Student, RosterError>> + Send {
        let students = Arc::clone(&self.students);
        async move {
            let mut students = students.write().await;
            let student = Student::from_new(next_id(&students), student);
            students.push(student.clone());
            Ok(student)
        }
    }

    fn get_by_id(
        &self,
        id: StudentId,
    ) -> impl Future<Output = Result<Option<Student>, RosterError>> + Send {
        let students = Arc::clone(&self.students);
        async move {
            let students = students.read().await;
            Ok(students.iter().find(|s| s.id == id).cloned())
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RosterError>> + Send {
        let students = Arc::clone(&self.students);
        async move { Ok(students.read().await.clone()) }
    }

    fn close(&self) -> impl Future<Output = ()> + Send {
        tracing::debug!("in-memory store has no connection to release");
        async {}
    }
}
