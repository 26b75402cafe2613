//! # roster-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **students JSON API** (`/students`, `/students/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses with uniform JSON error
//!   bodies: `404` for unknown students and unmatched routes, `500` for any
//!   store failure (details are logged, never returned)
//!
//! ## Dependency rule
//! Depends on `roster-app` (for port traits and services) and `roster-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
