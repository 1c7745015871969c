//! # Scribe Client
//!
//! Client library for the Scribe blog API. It keeps the session token in a
//! [`TokenStore`], attaches it to every request, and can restore a session
//! on startup with [`ApiClient::bootstrap`].

pub mod client;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod store;

pub use client::{ApiClient, PostDraft};
pub use config::ClientConfig;
pub use error::ClientError;
pub use interceptor::authorize;
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
