use actix_web::{web, HttpResponse};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/posts
///
/// All posts newest first, plus the most viewed ones.
pub async fn list_posts<U, P, C, I>(state: web::Data<AppState<U, P, C, I>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state.post_service.list_posts().await {
        Ok(overview) => HttpResponse::Ok().json(overview),
        Err(error) => handle_domain_error(error),
    }
}
