use async_trait::async_trait;

use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::upload_images::ImageUpload;

pub struct CreateProductParams {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    /// Raw uploads; files failing the store's extension or size policy are
    /// skipped per-file and never fail the create.
    pub images: Vec<ImageUpload>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
