//! # Scribe Core
//!
//! Core business logic and domain layer for the Scribe blog backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, Comment, Post, User, JWT_ISSUER, TOKEN_EXPIRY_DAYS};
pub use errors::{AuthError, DomainError, DomainResult, TokenError};
pub use repositories::{
    CommentRepository, MockCommentRepository, MockPostRepository, MockUserRepository,
    PostRepository, UserRepository,
};
pub use services::{
    AuthService, AuthServiceConfig, AuthSession, CommentService, ImageStore, ImageUpload,
    MockImageStore, NewPost, PasswordHasher, PostService, PostUpdate, TokenService,
    TokenServiceConfig, POPULAR_POSTS_LIMIT,
};
