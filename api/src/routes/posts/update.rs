use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::{ImageStore, PostUpdate};

use crate::app::AppState;
use crate::handlers::handle_domain_error;
use crate::middleware::auth::AuthContext;

use super::PostForm;

/// Handler for PUT /api/posts/{id}
///
/// Same form as creation. Without a new `image` the current one is kept.
///
/// ## Errors
/// - 400 Bad Request: Empty title or text
/// - 403 Forbidden: Caller is not the author
/// - 404 Not Found: No such post
pub async fn update_post<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    auth: AuthContext,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let form = match PostForm::read(payload, state.upload_limit).await {
        Ok(form) => form,
        Err(error) => return handle_domain_error(error),
    };

    let update = PostUpdate {
        title: form.title,
        text: form.text,
        image: form.image,
    };

    match state
        .post_service
        .update_post(auth.user_id, path.into_inner(), update)
        .await
    {
        Ok(post) => HttpResponse::Ok().json(post.view()),
        Err(error) => handle_domain_error(error),
    }
}
