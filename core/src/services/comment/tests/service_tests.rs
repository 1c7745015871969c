//! Unit tests for comment service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::post::Post;
use crate::domain::entities::user::User;
use crate::errors::DomainError;
use crate::repositories::{
    MockCommentRepository, MockPostRepository, MockUserRepository, PostRepository,
    UserRepository,
};
use crate::services::comment::CommentService;

struct Fixture {
    service: CommentService<MockCommentRepository, MockPostRepository, MockUserRepository>,
    author: User,
    post: Post,
    users: Arc<MockUserRepository>,
}

async fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let posts = Arc::new(MockPostRepository::new());
    let author = users
        .create(User::new("writer".to_string(), "hash".to_string()))
        .await
        .unwrap();
    let post = posts
        .create(Post::new(&author, "t".to_string(), "x".to_string(), None))
        .await
        .unwrap();

    let service = CommentService::new(
        Arc::new(MockCommentRepository::new()),
        posts,
        Arc::clone(&users),
    );
    Fixture {
        service,
        author,
        post,
        users,
    }
}

#[tokio::test]
async fn test_create_comment_resolves_author() {
    let fx = fixture().await;

    let view = fx
        .service
        .create_comment(fx.author.id, fx.post.id, "great post")
        .await
        .unwrap();
    assert_eq!(view.comment, "great post");
    assert_eq!(view.post_id, fx.post.id);
    assert_eq!(view.author.id, fx.author.id);
    assert_eq!(view.author.username, "writer");
}

#[tokio::test]
async fn test_empty_comment_rejected() {
    let fx = fixture().await;

    for text in ["", "   "] {
        let err = fx
            .service
            .create_comment(fx.author.id, fx.post.id, text)
            .await
            .unwrap_err();
        match err {
            DomainError::Validation { message } => {
                assert_eq!(message, "The comment cannot be empty")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[tokio::test]
async fn test_comment_on_missing_post() {
    let fx = fixture().await;
    let result = fx
        .service
        .create_comment(fx.author.id, Uuid::new_v4(), "hello")
        .await;

    assert!(matches!(result, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_post_comments_oldest_first() {
    let fx = fixture().await;
    let reader = fx
        .users
        .create(User::new("reader".to_string(), "hash".to_string()))
        .await
        .unwrap();

    fx.service
        .create_comment(fx.author.id, fx.post.id, "first")
        .await
        .unwrap();
    fx.service
        .create_comment(reader.id, fx.post.id, "second")
        .await
        .unwrap();

    let comments = fx.service.post_comments(fx.post.id).await.unwrap();
    let texts: Vec<&str> = comments.iter().map(|c| c.comment.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert_eq!(comments[1].author.username, "reader");
}

#[tokio::test]
async fn test_post_comments_for_missing_post() {
    let fx = fixture().await;
    assert!(matches!(
        fx.service.post_comments(Uuid::new_v4()).await,
        Err(DomainError::NotFound { .. })
    ));
}
