pub mod auth;
pub mod cors;

pub use auth::{extract_token, AuthContext, JwtAuth};
pub use cors::create_cors;
