//! Post service module
//!
//! Post lifecycle (create, list, view, edit, delete) and the image storage
//! seam used for post illustrations.

mod image_store;
mod service;

#[cfg(test)]
mod tests;

pub use image_store::{
    is_safe_file_name, sanitize_file_name, stored_file_name, ImageStore, ImageUpload,
    MockImageStore,
};
pub use service::{NewPost, PostService, PostUpdate, POPULAR_POSTS_LIMIT};
