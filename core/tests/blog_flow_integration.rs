//! Integration tests for the register, post and comment flow across services

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sb_core::{
        AuthService, AuthServiceConfig, CommentService, DomainError, MockCommentRepository,
        MockImageStore, MockPostRepository, MockUserRepository, NewPost, PostService,
        TokenError, TokenService, TokenServiceConfig,
    };
    use sb_shared::types::AuthCredentials;

    #[tokio::test]
    async fn test_full_blog_flow() {
        let users = Arc::new(MockUserRepository::new());
        let posts = Arc::new(MockPostRepository::new());
        let comments = Arc::new(MockCommentRepository::new());
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::with_secret("flow")));

        let auth = AuthService::new(
            Arc::clone(&users),
            Arc::clone(&tokens),
            AuthServiceConfig::with_bcrypt_cost(4),
        );
        let post_service = PostService::new(
            Arc::clone(&posts),
            Arc::clone(&users),
            Arc::clone(&comments),
            Arc::new(MockImageStore::new()),
        );
        let comment_service =
            CommentService::new(Arc::clone(&comments), Arc::clone(&posts), Arc::clone(&users));

        let session = auth
            .register(&AuthCredentials::new("alice", "pw1"))
            .await
            .unwrap();
        let user_id = tokens.verify(&session.token).unwrap();

        let post = post_service
            .create_post(
                user_id,
                NewPost {
                    title: "First".to_string(),
                    text: "Hello world".to_string(),
                    image: None,
                },
            )
            .await
            .unwrap();

        let comment = comment_service
            .create_comment(user_id, post.id, "Self-comment")
            .await
            .unwrap();
        assert_eq!(comment.author.username, "alice");

        let me = auth.me(user_id).await.unwrap();
        assert_eq!(me.user.posts, vec![post.id]);

        post_service.delete_post(user_id, post.id).await.unwrap();
        assert!(matches!(
            comment_service.post_comments(post.id).await,
            Err(DomainError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_token_from_other_deployment_rejected() {
        let ours = TokenService::new(TokenServiceConfig::with_secret("ours"));
        let theirs = TokenService::new(TokenServiceConfig::with_secret("theirs"));
        let users = Arc::new(MockUserRepository::new());
        let auth = AuthService::new(
            users,
            Arc::new(theirs),
            AuthServiceConfig::with_bcrypt_cost(4),
        );

        let session = auth
            .register(&AuthCredentials::new("bob", "pw"))
            .await
            .unwrap();
        assert_eq!(
            ours.verify(&session.token),
            Err(TokenError::InvalidSignature)
        );
    }
}
