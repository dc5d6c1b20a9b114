use std::sync::Arc;

use async_trait::async_trait;

use crate::application::product::store_images::store_images;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::model::{NewProduct, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let fields = NewProduct::new(
            params.name,
            params.description,
            params.price,
            params.quantity,
        )?;

        // The scalar row goes in first so image records have something to
        // reference; uploads are best-effort additions after that.
        let product_id = self.repository.insert(&fields).await?;
        self.logger
            .info(&format!("Product created with id: {}", product_id));

        if !params.images.is_empty() {
            let accepted = store_images(
                self.repository.as_ref(),
                self.image_store.as_ref(),
                self.logger.as_ref(),
                product_id,
                &params.images,
            )
            .await;
            self.logger.info(&format!(
                "Stored {} of {} uploaded images for product {}",
                accepted.len(),
                params.images.len(),
                product_id
            ));
        }

        match self.repository.get_by_id(product_id).await {
            Ok(product) => Ok(product),
            Err(RepositoryError::NotFound) => {
                self.logger.error(&format!(
                    "Product {} cannot be read back after insert",
                    product_id
                ));
                Err(ProductError::IntegrityFault)
            }
            Err(other) => Err(ProductError::Repository(other)),
        }
    }
}
