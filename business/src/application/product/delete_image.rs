use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete_image::{DeleteImageParams, DeleteImageUseCase};

pub struct DeleteImageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteImageUseCase for DeleteImageUseCaseImpl {
    async fn execute(&self, params: DeleteImageParams) -> Result<(), ProductError> {
        let image = self
            .repository
            .find_image(params.image_id)
            .await?
            .ok_or(ProductError::ImageNotFound)?;

        // Same ordering as everywhere else: file first, then the record.
        if !self.image_store.delete(&image.image_url).await {
            self.logger
                .warn(&format!("Image file already absent: {}", image.image_url));
        }

        self.repository.remove_image(image.id).await?;

        self.logger
            .info(&format!("Image deleted: {}", params.image_id));
        Ok(())
    }
}
