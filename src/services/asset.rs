use crate::config::UploadConfig;
use crate::services::product_service::ProductError;
use axum::body::Bytes;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const MAX_EXTENSION_LEN: usize = 10;

/// An image file received with a create/update request.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub data: Bytes,
}

/// Resolves image references to URLs servable under the upload prefix.
pub struct AssetService {
    directory: PathBuf,
    url_prefix: String,
}

impl AssetService {
    #[must_use]
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            directory: PathBuf::from(&config.directory),
            url_prefix: config.url_prefix.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub async fn ensure_directory(&self) -> Result<(), ProductError> {
        fs::create_dir_all(&self.directory).await.map_err(|e| {
            ProductError::Storage(format!(
                "Failed to create upload directory {}: {e}",
                self.directory.display()
            ))
        })?;
        debug!(path = %self.directory.display(), "Upload directory ready");
        Ok(())
    }

    /// Writes the upload to disk and returns its public URL.
    pub async fn store(&self, upload: &UploadedImage) -> Result<String, ProductError> {
        self.ensure_directory().await?;

        let filename = unique_filename(upload.file_name.as_deref());
        let file_path = self.directory.join(&filename);

        fs::write(&file_path, &upload.data).await.map_err(|e| {
            ProductError::Storage(format!(
                "Failed to write image to {}: {e}",
                file_path.display()
            ))
        })?;

        info!(
            path = %file_path.display(),
            size = upload.data.len(),
            original = ?upload.file_name,
            "Stored uploaded image"
        );

        Ok(format!("{}/{}", self.url_prefix, filename))
    }

    #[must_use]
    pub fn passthrough(url: String) -> String {
        url
    }

    /// An uploaded file wins over a URL supplied in the body.
    pub async fn resolve(
        &self,
        upload: Option<&UploadedImage>,
        body_url: Option<String>,
    ) -> Result<Option<String>, ProductError> {
        match upload {
            Some(upload) => self.store(upload).await.map(Some),
            None => Ok(body_url.map(Self::passthrough)),
        }
    }
}

/// `<unix-millis>-<8 hex>` plus the sanitized original extension.
fn unique_filename(original: Option<&str>) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    let stem = format!("{millis}-{}", &suffix[..8]);

    match original.and_then(sanitized_extension) {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem,
    }
}

fn sanitized_extension(original: &str) -> Option<String> {
    let ext = Path::new(original).extension()?.to_str()?;
    if ext.is_empty()
        || ext.len() > MAX_EXTENSION_LEN
        || !ext.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
