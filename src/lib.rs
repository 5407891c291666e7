//! Registration API - student/course registration backend
//!
//! Accepts registration requests over HTTP, validates form fields, computes
//! a billing amount from the chosen program, persists records in MongoDB
//! and exposes a status-update endpoint keyed by a generated
//! virtual-account identifier.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, validation and credential generation
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (document store, repositories)
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (response envelope)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Wipe both collections (administrative reset)
//! cargo run -- reset --yes
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use errors::{AppError, AppResult};
