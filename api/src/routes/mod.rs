//! HTTP route handlers, grouped by resource

pub mod auth;
pub mod comments;
pub mod posts;
pub mod uploads;
