//! Unit tests for the user entity

use uuid::Uuid;

use crate::domain::entities::user::User;

#[test]
fn test_new_user_creation() {
    let user = User::new("alice".to_string(), "$2b$04$hash".to_string());

    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "$2b$04$hash");
    assert!(user.posts.is_empty());
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_post_ownership_list_keeps_order() {
    let mut user = User::new("alice".to_string(), "hash".to_string());
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    user.push_post(first);
    user.push_post(second);
    user.push_post(first);

    assert_eq!(user.posts, vec![first, second]);
    assert!(user.owns_post(second));
}

#[test]
fn test_pull_post() {
    let mut user = User::new("alice".to_string(), "hash".to_string());
    let post_id = Uuid::new_v4();
    user.push_post(post_id);

    assert!(user.pull_post(post_id));
    assert!(!user.pull_post(post_id));
    assert!(!user.owns_post(post_id));
}

#[test]
fn test_profile_omits_password_hash() {
    let user = User::new("alice".to_string(), "secret-hash".to_string());
    let json = serde_json::to_string(&user.profile()).unwrap();

    assert!(json.contains("alice"));
    assert!(!json.contains("secret-hash"));
    assert!(!json.contains("password"));
}
