use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::ImageStore;

use crate::app::AppState;
use crate::handlers::handle_domain_error;

/// Handler for GET /api/posts/{id}
///
/// Counts as a view: the returned post already includes it.
pub async fn get_post<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    match state.post_service.view_post(path.into_inner()).await {
        Ok(post) => HttpResponse::Ok().json(post.view()),
        Err(error) => handle_domain_error(error),
    }
}
