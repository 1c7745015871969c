//! Domain entities representing core business objects.

pub mod comment;
pub mod post;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use comment::Comment;
pub use post::Post;
pub use token::{Claims, JWT_ISSUER, TOKEN_EXPIRY_DAYS};
pub use user::User;
