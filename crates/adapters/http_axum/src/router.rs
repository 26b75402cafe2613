//! Axum router assembly.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use roster_app::ports::StudentRepository;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Text served at `/`.
pub const GREETING: &str = "Students API";

/// Router-level switches.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Answer cross-origin requests from any origin.
    pub cors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { cors: true }
    }
}

/// Build the top-level axum [`Router`].
///
/// Merges the students API with `/` and `/health`, answers every other
/// method+path with a JSON `404`, and includes a [`TraceLayer`] that logs
/// each HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<SR>(state: AppState<SR>, settings: Settings) -> Router
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let mut router = Router::new()
        .route("/", get(greeting).fallback(route_not_found))
        .route("/health", get(health_check).fallback(route_not_found))
        .merge(crate::api::routes())
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http());

    if settings.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

async fn greeting() -> &'static str {
    GREETING
}

async fn health_check() -> &'static str {
    "OK"
}

/// Fallback for any method+path without a handler.
pub(crate) async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Route not found")),
    )
}
