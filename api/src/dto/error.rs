use actix_web::{http::StatusCode, HttpResponse};
pub use sb_shared::errors::ErrorResponse;

// Extension trait for ErrorResponse to add actix-web specific methods
pub trait ErrorResponseExt {
    fn to_response(&self, status: StatusCode) -> HttpResponse;
}

impl ErrorResponseExt for ErrorResponse {
    fn to_response(&self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sb_shared::errors::error_codes;

    #[test]
    fn test_to_response_keeps_status() {
        let response = ErrorResponse::new(error_codes::FORBIDDEN, "nope")
            .to_response(StatusCode::FORBIDDEN);
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
