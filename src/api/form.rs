//! Request body extraction for create and update.
//!
//! Reads JSON or `multipart/form-data`. Any other body, or a request without a
//! content type, yields an empty set of fields.

use axum::{
    Json,
    extract::{FromRequest, Multipart, Request},
    http::header,
};

use super::ApiError;
use crate::models::product::{ProductInput, parse_price};
use crate::services::UploadedImage;

/// Multipart part carrying the image file.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Default)]
pub struct ProductForm {
    pub input: ProductInput,
    pub image: Option<UploadedImage>,
}

impl<S> FromRequest<S> for ProductForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if ct.starts_with("multipart/form-data") => {
                let multipart = Multipart::from_request(req, state)
                    .await
                    .map_err(|rej| ApiError::validation(rej.body_text()))?;
                read_multipart(multipart).await
            }
            Some(ct) if is_json(ct) => {
                let Json(input) = Json::<ProductInput>::from_request(req, state)
                    .await
                    .map_err(|rej| ApiError::validation(rej.body_text()))?;
                Ok(Self { input, image: None })
            }
            other => {
                tracing::debug!(
                    content_type = ?other,
                    "No body parser for content type, using empty fields"
                );
                Ok(Self::default())
            }
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim();
    essence == "application/json" || essence.ends_with("+json")
}

async fn read_multipart(mut multipart: Multipart) -> Result<ProductForm, ApiError> {
    let mut form = ProductForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(format!("Invalid multipart request: {}", e.body_text())))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let file_name = field.file_name().map(str::to_owned);

        // Only a part carrying a filename is an upload.
        if name == IMAGE_FIELD && file_name.is_some() {
            let data = field.bytes().await.map_err(|e| {
                ApiError::validation(format!("Failed to read image: {}", e.body_text()))
            })?;

            // An untouched file input still submits an empty, unnamed part.
            if data.is_empty() && file_name.as_deref().is_none_or(str::is_empty) {
                continue;
            }

            form.image = Some(UploadedImage { file_name, data });
            continue;
        }

        if file_name.is_some() {
            tracing::debug!(field = %name, "Ignoring unexpected file part");
            continue;
        }

        let value = field.text().await.map_err(|e| {
            ApiError::validation(format!("Failed to read field {name}: {}", e.body_text()))
        })?;

        if name == "price" {
            form.input.price = parse_price(&value).map_err(ApiError::validation)?;
        } else {
            form.input.set_text_field(&name, value);
        }
    }

    Ok(form)
}
