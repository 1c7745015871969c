//! Post service implementation

use std::sync::Arc;

use chrono::Utc;
use sb_shared::types::PostsOverview;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{CommentRepository, PostRepository, UserRepository};

use super::image_store::{stored_file_name, ImageStore, ImageUpload};

/// Size of the "popular posts" list on the front page
pub const POPULAR_POSTS_LIMIT: usize = 5;

/// Input for creating a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub text: String,
    pub image: Option<ImageUpload>,
}

/// Input for editing a post. A `None` image keeps the current one.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub title: String,
    pub text: String,
    pub image: Option<ImageUpload>,
}

/// Service for post management
pub struct PostService<P, U, C, I>
where
    P: PostRepository,
    U: UserRepository,
    C: CommentRepository,
    I: ImageStore,
{
    post_repository: Arc<P>,
    user_repository: Arc<U>,
    comment_repository: Arc<C>,
    image_store: Arc<I>,
}

impl<P, U, C, I> PostService<P, U, C, I>
where
    P: PostRepository,
    U: UserRepository,
    C: CommentRepository,
    I: ImageStore,
{
    pub fn new(
        post_repository: Arc<P>,
        user_repository: Arc<U>,
        comment_repository: Arc<C>,
        image_store: Arc<I>,
    ) -> Self {
        Self {
            post_repository,
            user_repository,
            comment_repository,
            image_store,
        }
    }

    /// Create a post owned by `author_id`
    ///
    /// The image, if any, is written before the post row so a stored post
    /// never points at a missing file.
    pub async fn create_post(&self, author_id: Uuid, input: NewPost) -> DomainResult<Post> {
        Self::require_content(&input.title, &input.text)?;
        let author = self.load_user(author_id).await?;

        let image_url = match input.image {
            Some(image) => Some(self.store_image(image).await?),
            None => None,
        };

        let post = Post::new(&author, input.title, input.text, image_url);
        let post = self.post_repository.create(post).await?;
        self.user_repository.push_post(author.id, post.id).await?;

        tracing::info!(post_id = %post.id, author = %author.id, "Post created");
        Ok(post)
    }

    /// All posts newest first, plus the most viewed ones
    pub async fn list_posts(&self) -> DomainResult<PostsOverview> {
        let posts = self.post_repository.find_all().await?;
        let popular = self
            .post_repository
            .find_popular(POPULAR_POSTS_LIMIT)
            .await?;

        Ok(PostsOverview {
            posts: posts.iter().map(Post::view).collect(),
            popular_posts: popular.iter().map(Post::view).collect(),
        })
    }

    /// Fetch a post, counting the fetch as one view
    pub async fn view_post(&self, post_id: Uuid) -> DomainResult<Post> {
        self.post_repository
            .increment_views(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))
    }

    /// Posts owned by `user_id`, in the order they were created
    pub async fn my_posts(&self, user_id: Uuid) -> DomainResult<Vec<Post>> {
        let user = self.load_user(user_id).await?;
        self.post_repository.find_by_ids(&user.posts).await
    }

    /// Edit a post. Only its author may do so.
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::NotFound)` - No such post
    /// * `Err(DomainError::Forbidden)` - Caller is not the author
    pub async fn update_post(
        &self,
        user_id: Uuid,
        post_id: Uuid,
        input: PostUpdate,
    ) -> DomainResult<Post> {
        Self::require_content(&input.title, &input.text)?;
        let mut post = self.load_owned_post(user_id, post_id).await?;

        post.edit(input.title, input.text);

        let replaced = match input.image {
            Some(image) => {
                let file_name = self.store_image(image).await?;
                post.replace_image(file_name)
            }
            None => None,
        };

        let post = self.post_repository.update(post).await?;

        if let Some(old) = replaced {
            self.discard_image(&old).await;
        }

        tracing::info!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Delete a post with its comments and image. Only its author may do so.
    pub async fn delete_post(&self, user_id: Uuid, post_id: Uuid) -> DomainResult<Uuid> {
        let post = self.load_owned_post(user_id, post_id).await?;

        if !self.post_repository.delete(post.id).await? {
            return Err(DomainError::not_found("Post"));
        }

        let removed = self.comment_repository.delete_by_post(post.id).await?;
        self.user_repository.pull_post(post.author, post.id).await?;

        if post.has_image() {
            self.discard_image(&post.image_url).await;
        }

        tracing::info!(post_id = %post.id, comments = removed, "Post deleted");
        Ok(post.id)
    }

    async fn load_user(&self, user_id: Uuid) -> DomainResult<User> {
        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AuthError::StaleIdentity.into())
    }

    async fn load_owned_post(&self, user_id: Uuid, post_id: Uuid) -> DomainResult<Post> {
        let post = self
            .post_repository
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Post"))?;

        if !post.is_authored_by(user_id) {
            tracing::debug!(post_id = %post_id, user_id = %user_id, "Rejected edit by non-author");
            return Err(DomainError::forbidden("Only the author can modify this post"));
        }

        Ok(post)
    }

    async fn store_image(&self, image: ImageUpload) -> DomainResult<String> {
        let file_name = stored_file_name(&image.original_name, Utc::now().timestamp_millis());
        self.image_store.save(&file_name, image.bytes).await?;
        Ok(file_name)
    }

    async fn discard_image(&self, file_name: &str) {
        if let Err(e) = self.image_store.delete(file_name).await {
            tracing::warn!(file = %file_name, "Failed to remove image: {}", e);
        }
    }

    fn require_content(title: &str, text: &str) -> DomainResult<()> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("Title is required"));
        }
        if text.trim().is_empty() {
            return Err(DomainError::validation("Text is required"));
        }
        Ok(())
    }
}
