//! Multipart form parsing for post create and update

use actix_multipart::{Field, Multipart};
use futures_util::StreamExt;

use sb_core::errors::{DomainError, DomainResult};
use sb_core::services::ImageUpload;

/// Fields of a post form: `title`, `text` and an optional `image` file
#[derive(Debug, Default)]
pub struct PostForm {
    pub title: String,
    pub text: String,
    pub image: Option<ImageUpload>,
}

impl PostForm {
    /// Read every part of `payload`, rejecting any field over `limit` bytes
    ///
    /// Unknown fields are drained and ignored. A file part with an empty file
    /// name or no content counts as no image.
    pub async fn read(mut payload: Multipart, limit: usize) -> DomainResult<Self> {
        let mut form = PostForm::default();

        while let Some(item) = payload.next().await {
            let mut field = item.map_err(malformed)?;

            let disposition = field.content_disposition();
            let name = disposition.get_name().unwrap_or_default().to_string();
            let file_name = disposition.get_filename().map(str::to_string);

            let bytes = read_field(&mut field, &name, limit).await?;

            match name.as_str() {
                "title" => form.title = into_text(bytes, "title")?,
                "text" => form.text = into_text(bytes, "text")?,
                "image" => {
                    form.image = file_name
                        .filter(|n| !n.is_empty() && !bytes.is_empty())
                        .map(|n| ImageUpload::new(n, bytes));
                }
                other => log::debug!("Ignoring form field '{}'", other),
            }
        }

        Ok(form)
    }
}

async fn read_field(field: &mut Field, name: &str, limit: usize) -> DomainResult<Vec<u8>> {
    let mut bytes = Vec::new();

    while let Some(chunk) = field.next().await {
        let chunk = chunk.map_err(malformed)?;
        if bytes.len() + chunk.len() > limit {
            return Err(DomainError::validation(format!(
                "Field '{}' exceeds the {} byte limit",
                name, limit
            )));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

fn into_text(bytes: Vec<u8>, name: &str) -> DomainResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| DomainError::validation(format!("Field '{}' must be UTF-8 text", name)))
}

fn malformed(error: actix_multipart::MultipartError) -> DomainError {
    log::debug!("Malformed multipart body: {}", error);
    DomainError::validation("Expected a multipart/form-data body")
}
