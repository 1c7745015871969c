//! Serving stored post images

use actix_web::{http::header, web, HttpResponse};

use sb_core::repositories::{CommentRepository, PostRepository, UserRepository};
use sb_core::services::post::is_safe_file_name;
use sb_core::services::ImageStore;
use sb_shared::errors::error_codes;

use crate::app::AppState;
use crate::dto::ErrorResponse;
use crate::handlers::handle_domain_error;

/// Handler for GET /uploads/{file}
pub async fn serve<U, P, C, I>(
    state: web::Data<AppState<U, P, C, I>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    C: CommentRepository + 'static,
    I: ImageStore + 'static,
{
    let file_name = path.into_inner();
    if !is_safe_file_name(&file_name) {
        return image_not_found();
    }

    match state.image_store.load(&file_name).await {
        Ok(Some(bytes)) => HttpResponse::Ok()
            .content_type(content_type_for(&file_name))
            .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
            .body(bytes),
        Ok(None) => image_not_found(),
        Err(error) => handle_domain_error(error),
    }
}

/// Guess an image content type from the file extension
///
/// Only raster formats are served as images. Anything a browser could run
/// script from, SVG included, goes out as opaque bytes.
pub fn content_type_for(file_name: &str) -> &'static str {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

fn image_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(error_codes::NOT_FOUND, "Image not found"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_for() {
        assert_eq!(content_type_for("1700000000000cat.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("a.webp"), "image/webp");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
        assert_eq!(content_type_for("logo.svg"), "application/octet-stream");
        assert_eq!(content_type_for("page.HTML"), "application/octet-stream");
    }
}
