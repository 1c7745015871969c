//! HTTP API for the Scribe blog backend
//!
//! Library exports for the server binary and for integration tests.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState};
