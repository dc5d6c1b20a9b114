use std::env;
use std::path::PathBuf;

use asset_store::IMAGE_URL_PREFIX;

/// Location of the public asset directory backing image files.
#[derive(Debug, Clone)]
pub struct AssetsConfig {
    pub root: PathBuf,
}

impl AssetsConfig {
    /// Load asset configuration from environment variables
    ///
    /// Environment variables:
    /// - ASSETS_DIR: directory whose `product-images/` subdirectory holds
    ///   the stored files (default: "public")
    pub fn from_env() -> Self {
        let root = env::var("ASSETS_DIR").unwrap_or_else(|_| "public".to_string());
        Self { root: root.into() }
    }

    /// Directory served under the image URL prefix.
    pub fn image_dir(&self) -> PathBuf {
        self.root
            .join(IMAGE_URL_PREFIX.trim_start_matches('/'))
    }
}
