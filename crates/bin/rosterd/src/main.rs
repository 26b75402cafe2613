//! # rosterd — roster daemon
//!
//! Composition root that wires a store adapter into the HTTP adapter and
//! starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Build the selected store: seeded in-memory sequence, or `SQLite`
//!   connection pool with migrations
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the service
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT), then release the store
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod shutdown;

use std::sync::Arc;

use roster_adapter_http_axum::router::{self, Settings};
use roster_adapter_http_axum::state::AppState;
use roster_adapter_storage_memory::{InMemoryStudentRepository, demo_students};
use roster_adapter_storage_sqlite_sqlx::SqliteStudentRepository;
use roster_app::ports::StudentRepository;
use roster_app::services::student_service::StudentService;
use tracing_subscriber::EnvFilter;

use crate::config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.logging.filter).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match config.storage.backend {
        Backend::Memory => {
            let repo = if config.storage.seed {
                InMemoryStudentRepository::with_students(demo_students())
            } else {
                InMemoryStudentRepository::new()
            };
            serve(repo, &config).await
        }
        Backend::Sqlite => {
            let db = roster_adapter_storage_sqlite_sqlx::Config {
                database_url: config.database_url().to_string(),
            }
            .build()
            .await?;
            serve(SqliteStudentRepository::new(db.pool().clone()), &config).await
        }
    }
}

/// Serve the HTTP API on top of `repo` until a termination signal arrives,
/// then release the store.
async fn serve<SR>(repo: SR, config: &Config) -> Result<(), Box<dyn std::error::Error>>
where
    SR: StudentRepository + Send + Sync + 'static,
{
    let service = Arc::new(StudentService::new(repo));
    let state = AppState::from_arc(Arc::clone(&service));
    let app = router::build(
        state,
        Settings {
            cors: config.server.cors,
        },
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        backend = ?config.storage.backend,
        "rosterd listening"
    );

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::signal())
        .await;

    service.shutdown().await;
    tracing::info!("rosterd stopped");

    result.map_err(Into::into)
}
