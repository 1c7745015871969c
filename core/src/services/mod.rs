//! Business services containing domain logic and use cases.

pub mod auth;
pub mod comment;
pub mod post;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig, AuthSession, PasswordHasher};
pub use comment::CommentService;
pub use post::{
    ImageStore, ImageUpload, MockImageStore, NewPost, PostService, PostUpdate,
    POPULAR_POSTS_LIMIT,
};
pub use token::{TokenService, TokenServiceConfig};
