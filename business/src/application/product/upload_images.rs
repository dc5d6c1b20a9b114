use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::store_images::store_images;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::upload_images::{
    ImageUploadReport, UploadImagesParams, UploadImagesUseCase,
};

pub struct UploadImagesUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadImagesUseCase for UploadImagesUseCaseImpl {
    async fn execute(
        &self,
        params: UploadImagesParams,
    ) -> Result<ImageUploadReport, ProductError> {
        self.logger.info(&format!(
            "Uploading {} images for product {}",
            params.files.len(),
            params.product_id
        ));

        self.repository
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let accepted = store_images(
            self.repository.as_ref(),
            self.image_store.as_ref(),
            self.logger.as_ref(),
            params.product_id,
            &params.files,
        )
        .await;

        // An upload where nothing survived the policy is a failure the
        // caller hears about, not a silent no-op.
        if accepted.is_empty() {
            return Err(ProductError::NoImagesAccepted);
        }

        self.logger.info(&format!(
            "{} images uploaded for product {}",
            accepted.len(),
            params.product_id
        ));
        Ok(ImageUploadReport {
            image_urls: accepted,
        })
    }
}
