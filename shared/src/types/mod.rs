//! Wire types exchanged between the API and its clients

pub mod auth;
pub mod blog;
pub mod response;

pub use auth::{AuthCredentials, LoginResponse, MeResponse, RegisterResponse, UserProfile};
pub use blog::{
    AuthorSummary, CommentView, CreateCommentRequest, DeletePostResponse, PostView, PostsOverview,
};
pub use response::HealthResponse;
