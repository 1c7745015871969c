pub mod comment;
pub mod post;
pub mod user;

pub use comment::{CommentRepository, MockCommentRepository};
pub use post::{MockPostRepository, PostRepository};
pub use user::{MockUserRepository, UserRepository};
