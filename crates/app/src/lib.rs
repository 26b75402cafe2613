//! # roster-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driven port** adapters must implement:
//!   - `StudentRepository` — list, look up, create, and release the store
//! - Define the **driving port** as a use-case struct:
//!   - `StudentService` — list, get, create, shutdown
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `roster-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
