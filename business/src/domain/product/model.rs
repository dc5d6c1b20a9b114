use bigdecimal::{BigDecimal, rounding::RoundingMode};
use num_traits::Zero;

use super::errors::ProductError;

pub const MAX_NAME_LENGTH: usize = 100;

/// A catalog product together with its owned image records.
///
/// Ids are generated by the store on insert; images are kept in insertion
/// order (ascending image id).
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
    pub images: Vec<ProductImage>,
}

/// An image record owned by exactly one product. `image_url` is a
/// root-relative path into the asset store; the backing file must exist
/// except inside the documented partial-failure windows.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductImage {
    pub id: i64,
    pub product_id: i64,
    pub image_url: String,
}

/// Validated scalar fields for a product that has no id yet, or for a
/// full-replace update of an existing one.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub quantity: i32,
}

impl NewProduct {
    pub fn new(
        name: String,
        description: Option<String>,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Self, ProductError> {
        if name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }
        if name.chars().count() > MAX_NAME_LENGTH {
            return Err(ProductError::NameTooLong);
        }
        if price < BigDecimal::zero() {
            return Err(ProductError::PriceNegative);
        }
        if quantity < 0 {
            return Err(ProductError::QuantityNegative);
        }

        Ok(Self {
            name,
            description,
            price: price.with_scale_round(2, RoundingMode::HalfUp),
            quantity,
        })
    }
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        description: Option<String>,
        price: BigDecimal,
        quantity: i32,
        images: Vec<ProductImage>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            quantity,
            images,
        }
    }

    pub fn owned_image(&self, image_id: i64) -> Option<&ProductImage> {
        self.images.iter().find(|image| image.id == image_id)
    }
}
