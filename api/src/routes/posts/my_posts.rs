use actix_web::{web, HttpResponse};
use sb_shared::types::PostView;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/posts/user/myposts
///
/// The caller's posts in the order they were created.
pub async fn my_posts<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state.post_service.my_posts(auth.user_id).await {
        Ok(posts) => {
            let views: Vec<PostView> = posts.iter().map(PostView::from).collect();
            HttpResponse::Ok().json(views)
        }
        Err(error) => handle_domain_error(error),
    }
}
