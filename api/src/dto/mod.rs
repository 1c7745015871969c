//! Request and response bodies specific to the HTTP layer
//!
//! Bodies shared with the client live in `sb_shared::types`.

pub mod auth;
pub mod error;

pub use auth::{LoginRequest, RegisterRequest};
pub use error::{ErrorResponse, ErrorResponseExt};
