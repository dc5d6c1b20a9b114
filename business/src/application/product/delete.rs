use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::image_store::ImageStore;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Deleting product {} with {} images",
            product.id,
            product.images.len()
        ));

        // File bytes go before the records that describe them; if the
        // process dies in between, the remaining records flag the gap on
        // the next read instead of leaving unfindable files behind.
        for image in &product.images {
            if !self.image_store.delete(&image.image_url).await {
                self.logger
                    .warn(&format!("Image file already absent: {}", image.image_url));
            }
        }

        let deleted = self.repository.delete(params.id).await?;
        if !deleted {
            // Lost a race with a concurrent delete; the outcome stands.
            self.logger
                .warn(&format!("Product {} was already gone", params.id));
        }

        self.logger
            .info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::image_store::ImageStoreError;
    use crate::domain::product::model::{NewProduct, Product, ProductImage};
    use crate::domain::product::repository::PageRequest;
    use bigdecimal::BigDecimal;
    use mockall::mock;
    use std::str::FromStr;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn get_page(&self, request: &PageRequest) -> Result<(Vec<Product>, i64), RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;
            async fn insert(&self, product: &NewProduct) -> Result<i64, RepositoryError>;
            async fn update(&self, id: i64, fields: &NewProduct, remove_image_ids: &[i64]) -> Result<(), RepositoryError>;
            async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
            async fn insert_image(&self, product_id: i64, image_url: &str) -> Result<i64, RepositoryError>;
            async fn remove_image(&self, image_id: i64) -> Result<(), RepositoryError>;
            async fn find_image(&self, image_id: i64) -> Result<Option<ProductImage>, RepositoryError>;
        }
    }

    mock! {
        pub Store {}

        #[async_trait]
        impl ImageStore for Store {
            async fn save(&self, bytes: &[u8], original_name: &str) -> Result<String, ImageStoreError>;
            async fn delete(&self, image_url: &str) -> bool;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product_with_images(id: i64, count: i64) -> Product {
        Product::from_repository(
            id,
            "Widget".to_string(),
            None,
            BigDecimal::from_str("9.99").unwrap(),
            5,
            (1..=count)
                .map(|image_id| ProductImage {
                    id: image_id,
                    product_id: id,
                    image_url: format!("/product-images/{image_id}.png"),
                })
                .collect(),
        )
    }

    #[tokio::test]
    async fn should_delete_files_then_records_when_product_exists() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_store = MockStore::new();

        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_images(id, 3)));
        mock_store.expect_delete().times(3).returning(|_| true);
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 404 }).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_remove_records_even_when_no_file_could_be_deleted() {
        let mut mock_repo = MockProductRepo::new();
        let mut mock_store = MockStore::new();

        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_images(id, 2)));
        mock_store.expect_delete().times(2).returning(|_| false);
        mock_repo.expect_delete().times(1).returning(|_| Ok(true));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(mock_store),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_succeed_when_row_vanished_between_read_and_delete() {
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(product_with_images(id, 0)));
        mock_repo.expect_delete().returning(|_| Ok(false));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            image_store: Arc::new(MockStore::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 1 }).await;
        assert!(result.is_ok());
    }
}
