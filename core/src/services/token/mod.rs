//! Token service module for JWT management
//!
//! Issues and verifies the stateless bearer tokens carried by every
//! authenticated request. Nothing is stored server-side.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
