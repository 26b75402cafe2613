//! Shared application state for axum handlers.

use std::sync::Arc;

use roster_app::ports::StudentRepository;
use roster_app::services::student_service::StudentService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not
/// need to be `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<SR> {
    /// Student service.
    pub student_service: Arc<StudentService<SR>>,
}

impl<SR> Clone for AppState<SR> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
        }
    }
}

impl<SR> AppState<SR>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(student_service: StudentService<SR>) -> Self {
        Self::from_arc(Arc::new(student_service))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service must outlive the router, e.g. to release
    /// the store once the server has shut down.
    pub fn from_arc(student_service: Arc<StudentService<SR>>) -> Self {
        Self { student_service }
    }
}
