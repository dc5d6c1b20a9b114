use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::store_images::store_images;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let fields = NewProduct::new(
            params.name,
            params.description,
            params.price,
            params.quantity,
        )?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Removal ids that do not belong to this product are ignored.
        let removals: Vec<_> = params
            .remove_image_ids
            .iter()
            .filter_map(|image_id| existing.owned_image(*image_id))
            .collect();

        // Backing files are deleted before their records go; a crash in
        // between leaves a record without a file, never an untracked file.
        for image in &removals {
            if !self.image_store.delete(&image.image_url).await {
                self.logger
                    .warn(&format!("Image file already absent: {}", image.image_url));
            }
        }

        let remove_ids: Vec<i64> = removals.iter().map(|image| image.id).collect();
        self.repository
            .update(params.id, &fields, &remove_ids)
            .await?;

        if !params.new_images.is_empty() {
            let accepted = store_images(
                self.repository.as_ref(),
                self.image_store.as_ref(),
                self.logger.as_ref(),
                params.id,
                &params.new_images,
            )
            .await;
            self.logger.info(&format!(
                "Stored {} of {} new images for product {}",
                accepted.len(),
                params.new_images.len(),
                params.id
            ));
        }

        let updated = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
