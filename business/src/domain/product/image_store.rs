use async_trait::async_trait;

/// Per-file failures from the asset store. All of them are skippable
/// inside a multi-file upload: a rejected or unwritable file never aborts
/// the batch it arrived in.
#[derive(Debug, thiserror::Error)]
pub enum ImageStoreError {
    #[error("image.unsupported_media_type")]
    UnsupportedMediaType,
    #[error("image.payload_too_large")]
    PayloadTooLarge,
    #[error("image.io_error")]
    Io,
}

/// Port for the component owning the physical image files. It stores
/// bytes under generated collision-free names and knows nothing about the
/// records that reference them; the caller decides whether a returned
/// path gets persisted.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Validates extension and size policy, writes the bytes under a
    /// freshly generated name, and returns the root-relative URL of the
    /// stored file.
    async fn save(&self, bytes: &[u8], original_name: &str) -> Result<String, ImageStoreError>;

    /// Removes the file behind `image_url` if it is still there. Returns
    /// whether a file was actually deleted. Asset cleanup is always
    /// best-effort relative to the record mutation that triggered it, so
    /// implementations log and swallow filesystem errors instead of
    /// propagating them.
    async fn delete(&self, image_url: &str) -> bool;
}
