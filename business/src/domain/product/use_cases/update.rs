use async_trait::async_trait;

use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::use_cases::upload_images::ImageUpload;

/// Full-replace update: every scalar field is overwritten, an omitted
/// value clears the field rather than preserving it.
pub struct UpdateProductParams {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    /// Image ids to detach; ids not owned by this product are ignored.
    pub remove_image_ids: Vec<i64>,
    pub new_images: Vec<ImageUpload>,
}

#[async_trait]
pub trait UpdateProductUseCase: Send + Sync {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
}
