//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Router;
use axum::routing::get;

use roster_app::ports::StudentRepository;

use crate::router::route_not_found;
use crate::state::AppState;

/// Build the students sub-router.
///
/// Methods a path does not support fall through to the same `404` as an
/// unknown path.
pub fn routes<SR>() -> Router<AppState<SR>>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/students",
            get(students::list::<SR>)
                .post(students::create::<SR>)
                .fallback(route_not_found),
        )
        .route(
            "/students/{id}",
            get(students::get::<SR>).fallback(route_not_found),
        )
}
