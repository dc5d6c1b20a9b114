use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use uuid::Uuid;

use business::domain::product::image_store::{ImageStore, ImageStoreError};

/// URL prefix under which stored images are exposed by the HTTP layer.
pub const IMAGE_URL_PREFIX: &str = "/product-images";

const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];
const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Image store backed by a local directory. Files live under
/// `<root>/product-images/<uuid><ext>`; the uuid makes concurrent saves
/// collision-free without any locking. The directory is created on first
/// use, not at startup.
pub struct DiskImageStore {
    root: PathBuf,
}

impl DiskImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn image_dir(&self) -> PathBuf {
        self.root.join("product-images")
    }

    /// Maps a stored URL back to its path on disk. Anything that is not a
    /// single file name directly under the image directory is refused, so
    /// a crafted URL cannot reach outside the root.
    fn resolve(&self, image_url: &str) -> Option<PathBuf> {
        let file_name = image_url
            .strip_prefix(IMAGE_URL_PREFIX)?
            .strip_prefix('/')?;

        let mut components = Path::new(file_name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) => Some(self.image_dir().join(name)),
            _ => None,
        }
    }

    fn allowed_extension(original_name: &str) -> Option<String> {
        let extension = Path::new(original_name).extension()?.to_str()?.to_lowercase();
        ALLOWED_EXTENSIONS
            .contains(&extension.as_str())
            .then_some(extension)
    }
}

#[async_trait]
impl ImageStore for DiskImageStore {
    async fn save(&self, bytes: &[u8], original_name: &str) -> Result<String, ImageStoreError> {
        let Some(extension) = Self::allowed_extension(original_name) else {
            tracing::warn!(file = original_name, "rejected image with unsupported extension");
            return Err(ImageStoreError::UnsupportedMediaType);
        };

        if bytes.len() > MAX_IMAGE_BYTES {
            tracing::warn!(
                file = original_name,
                size = bytes.len(),
                "rejected image over the size limit"
            );
            return Err(ImageStoreError::PayloadTooLarge);
        }

        let dir = self.image_dir();
        fs::create_dir_all(&dir).await.map_err(|err| {
            tracing::error!(?err, dir = %dir.display(), "failed to create image directory");
            ImageStoreError::Io
        })?;

        let file_name = format!("{}.{extension}", Uuid::new_v4());
        let path = dir.join(&file_name);
        fs::write(&path, bytes).await.map_err(|err| {
            tracing::error!(?err, path = %path.display(), "failed to write image file");
            ImageStoreError::Io
        })?;

        Ok(format!("{IMAGE_URL_PREFIX}/{file_name}"))
    }

    async fn delete(&self, image_url: &str) -> bool {
        let Some(path) = self.resolve(image_url) else {
            tracing::warn!(url = image_url, "refusing to delete unresolvable image url");
            return false;
        };

        match fs::remove_file(&path).await {
            Ok(()) => true,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => false,
            Err(err) => {
                // Cleanup is best-effort; the record mutation that asked
                // for it must not fail over a leftover file.
                tracing::error!(?err, path = %path.display(), "failed to delete image file");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, DiskImageStore) {
        let dir = TempDir::new().unwrap();
        let store = DiskImageStore::new(dir.path());
        (dir, store)
    }

    fn on_disk(root: &TempDir, image_url: &str) -> PathBuf {
        root.path()
            .join(image_url.trim_start_matches('/'))
    }

    #[tokio::test]
    async fn should_write_file_and_return_prefixed_url() {
        let (dir, store) = store();

        let url = store.save(b"png-bytes", "photo.PNG").await.unwrap();

        assert!(url.starts_with("/product-images/"));
        assert!(url.ends_with(".png"));
        assert_eq!(std::fs::read(on_disk(&dir, &url)).unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn should_reject_disallowed_extension() {
        let (_dir, store) = store();

        let result = store.save(b"bytes", "malware.exe").await;
        assert!(matches!(
            result.unwrap_err(),
            ImageStoreError::UnsupportedMediaType
        ));

        let result = store.save(b"bytes", "no-extension").await;
        assert!(matches!(
            result.unwrap_err(),
            ImageStoreError::UnsupportedMediaType
        ));
    }

    #[tokio::test]
    async fn should_reject_file_over_five_mebibytes() {
        let (_dir, store) = store();

        let oversized = vec![0u8; MAX_IMAGE_BYTES + 1];
        let result = store.save(&oversized, "huge.jpg").await;
        assert!(matches!(
            result.unwrap_err(),
            ImageStoreError::PayloadTooLarge
        ));
    }

    #[tokio::test]
    async fn should_accept_file_exactly_at_the_size_limit() {
        let (_dir, store) = store();

        let at_limit = vec![0u8; MAX_IMAGE_BYTES];
        assert!(store.save(&at_limit, "big.jpg").await.is_ok());
    }

    #[tokio::test]
    async fn should_generate_distinct_paths_for_same_original_name() {
        let (dir, store) = store();

        let first = store.save(b"one", "photo.jpg").await.unwrap();
        let second = store.save(b"two", "photo.jpg").await.unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(on_disk(&dir, &first)).unwrap(), b"one");
        assert_eq!(std::fs::read(on_disk(&dir, &second)).unwrap(), b"two");
    }

    #[tokio::test]
    async fn should_delete_idempotently() {
        let (dir, store) = store();

        let url = store.save(b"bytes", "photo.jpg").await.unwrap();
        assert!(store.delete(&url).await);
        assert!(!on_disk(&dir, &url).exists());
        // Second delete finds nothing and still does not fail.
        assert!(!store.delete(&url).await);
    }

    #[tokio::test]
    async fn should_refuse_urls_outside_the_image_directory() {
        let (_dir, store) = store();

        assert!(!store.delete("/product-images/../secrets.txt").await);
        assert!(!store.delete("/product-images/a/b.png").await);
        assert!(!store.delete("/elsewhere/file.png").await);
        assert!(!store.delete("relative.png").await);
    }
}
