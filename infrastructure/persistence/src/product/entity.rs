use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::model::{Product, ProductImage};

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl ProductEntity {
    /// Images are loaded in a separate query and attached here.
    pub fn into_domain(self, images: Vec<ProductImage>) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.quantity,
            images,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct ProductImageEntity {
    pub id: i64,
    pub product_id: i64,
    pub image_url: String,
}

impl ProductImageEntity {
    pub fn into_domain(self) -> ProductImage {
        ProductImage {
            id: self.id,
            product_id: self.product_id,
            image_url: self.image_url,
        }
    }
}
