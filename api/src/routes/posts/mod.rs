//! Post route handlers
//!
//! Reads are public. Creating, editing and deleting go through the auth gate,
//! and editing and deleting are limited to the post's author.

pub mod comments;
pub mod create;
pub mod delete;
pub mod form;
pub mod get;
pub mod list;
pub mod my_posts;
pub mod update;

pub use comments::post_comments;
pub use create::create_post;
pub use delete::delete_post;
pub use form::PostForm;
pub use get::get_post;
pub use list::list_posts;
pub use my_posts::my_posts;
pub use update::update_post;

pub const POST_DELETED_MESSAGE: &str = "The post has been deleted";
