use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::form::ProductForm;
use super::{ApiError, AppState, ChangesResponse};
use crate::config::UploadMode;
use crate::models::product::{Product, ProductInput};

/// `GET /products`
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products().list().await?;
    Ok(Json(products))
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::product_not_found)?;
    let product = state.products().get(id).await?;
    Ok(Json(product))
}

/// `POST /products`
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    form: ProductForm,
) -> Result<Json<Product>, ApiError> {
    let input = prepare_input(&state, form).await?;
    let product = state.products().create(input).await?;
    Ok(Json(product))
}

/// `PUT /products/{id}`
///
/// Replaces every field. Fields missing from the request become null.
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    form: ProductForm,
) -> Result<Json<ChangesResponse>, ApiError> {
    let input = prepare_input(&state, form).await?;

    let changes = match parse_id(&id) {
        Some(id) => state.products().update(id, input).await?,
        None => 0,
    };

    changed_or_not_found(&state, changes)
}

/// `DELETE /products/{id}`
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<ChangesResponse>, ApiError> {
    let changes = match parse_id(&id) {
        Some(id) => state.products().delete(id).await?,
        None => 0,
    };

    changed_or_not_found(&state, changes)
}

/// Ids that are not integers cannot match a row.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

fn changed_or_not_found(
    state: &AppState,
    changes: u64,
) -> Result<Json<ChangesResponse>, ApiError> {
    if changes == 0 && state.config().products.not_found_on_zero_changes {
        return Err(ApiError::product_not_found());
    }
    Ok(Json(ChangesResponse { changes }))
}

/// Applies the upload mode and presence check, then resolves the image URL.
/// Nothing is written to disk unless the request is accepted.
async fn prepare_input(state: &AppState, form: ProductForm) -> Result<ProductInput, ApiError> {
    let ProductForm { mut input, image } = form;
    let config = state.config();

    if image.is_some() && config.uploads.mode == UploadMode::UrlOnly {
        return Err(ApiError::validation(
            "Image uploads are disabled; supply image_url instead",
        ));
    }

    if config.products.require_fields {
        check_required_fields(&input, image.is_some())?;
    }

    let body_url = input.image_url.take();
    let image_url = state.assets().resolve(image.as_ref(), body_url).await?;
    Ok(input.with_image_url(image_url))
}

fn check_required_fields(input: &ProductInput, has_upload: bool) -> Result<(), ApiError> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

    let mut missing = Vec::new();
    if !present(&input.name) {
        missing.push("name");
    }
    if !has_upload && !present(&input.image_url) {
        missing.push("image_url");
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("1.5"), None);
    }

    #[test]
    fn test_required_fields() {
        let mut input = ProductInput {
            name: Some("Mango".to_string()),
            ..Default::default()
        };
        assert!(check_required_fields(&input, true).is_ok());

        let err = check_required_fields(&input, false).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(msg) if msg.ends_with("image_url")));

        input.image_url = Some("https://cdn.example/mango.png".to_string());
        assert!(check_required_fields(&input, false).is_ok());

        input.name = Some("   ".to_string());
        let err = check_required_fields(&input, false).unwrap_err();
        assert!(matches!(err, ApiError::ValidationError(msg) if msg.ends_with(": name")));
    }
}
