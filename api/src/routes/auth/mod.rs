//! Authentication route handlers
//!
//! - Registration and login, which issue tokens
//! - "Who am I", which re-issues one for an already authenticated caller

pub mod login;
pub mod me;
pub mod register;

pub use login::login;
pub use me::me;
pub use register::register;

pub const REGISTERED_MESSAGE: &str = "Successful registration";
pub const LOGGED_IN_MESSAGE: &str = "Successful authorization";
