use async_trait::async_trait;

use crate::domain::product::errors::ProductError;

/// One raw uploaded file: the bytes plus the client-supplied name, which
/// is only used for its extension.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub struct UploadImagesParams {
    pub product_id: i64,
    pub files: Vec<ImageUpload>,
}

/// Outcome of a standalone upload batch. Present only when at least one
/// file was accepted; a batch where every file was rejected fails with
/// `ProductError::NoImagesAccepted` instead of reporting an empty success.
#[derive(Debug)]
pub struct ImageUploadReport {
    pub image_urls: Vec<String>,
}

#[async_trait]
pub trait UploadImagesUseCase: Send + Sync {
    async fn execute(&self, params: UploadImagesParams)
    -> Result<ImageUploadReport, ProductError>;
}
