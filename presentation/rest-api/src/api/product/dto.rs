use bigdecimal::BigDecimal;
use poem_openapi::types::multipart::Upload;
use poem_openapi::{Multipart, Object};

use business::domain::product::model::{Product, ProductImage};
use business::domain::product::use_cases::get_page::ProductPage;

/// Multipart form for creating a product, with zero or more image files.
#[derive(Debug, Multipart)]
pub struct CreateProductForm {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Non-negative price with two fraction digits
    pub price: BigDecimal,
    /// Units in stock
    #[oai(validator(minimum(value = "0")))]
    pub quantity: i32,
    /// Image files; rejected files are skipped, not fatal
    pub images: Vec<Upload>,
}

/// Multipart form for a full-replace update. Omitting a scalar field
/// clears it; it is not a patch.
#[derive(Debug, Multipart)]
pub struct UpdateProductForm {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1, max_length = 100))]
    pub name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Non-negative price with two fraction digits
    pub price: BigDecimal,
    /// Units in stock
    #[oai(validator(minimum(value = "0")))]
    pub quantity: i32,
    /// Ids of owned images to remove; foreign ids are ignored
    pub remove_image_ids: Vec<i64>,
    /// Additional image files to attach
    pub new_images: Vec<Upload>,
}

/// Multipart form for attaching images to an existing product.
#[derive(Debug, Multipart)]
pub struct UploadImagesForm {
    pub images: Vec<Upload>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductImageResponse {
    /// Image record id
    pub id: i64,
    /// Root-relative URL served as a static asset
    pub image_url: String,
}

impl From<ProductImage> for ProductImageResponse {
    fn from(image: ProductImage) -> Self {
        Self {
            id: image.id,
            image_url: image.image_url,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Price with two fraction digits
    pub price: BigDecimal,
    /// Units in stock
    pub quantity: i32,
    /// Owned images in insertion order
    pub images: Vec<ProductImageResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            images: product.images.into_iter().map(|image| image.into()).collect(),
        }
    }
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Object)]
pub struct PaginatedProductsResponse {
    pub items: Vec<ProductResponse>,
    pub total_count: i64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

impl From<ProductPage> for PaginatedProductsResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            items: page.items.into_iter().map(|product| product.into()).collect(),
            total_count: page.total_count,
            total_pages: page.total_pages,
            current_page: page.current_page,
            page_size: page.page_size,
            has_previous_page: page.has_previous_page,
            has_next_page: page.has_next_page,
        }
    }
}

/// Result of an image upload batch.
#[derive(Debug, Clone, Object)]
pub struct ImageUploadResponse {
    /// Human-readable summary with the accepted count
    pub message: String,
    /// URLs of the stored images
    pub image_urls: Vec<String>,
}
