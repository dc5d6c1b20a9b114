use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct GetProductPageParams {
    pub page_number: u32,
    pub page_size: u32,
    pub search: Option<String>,
}

/// One page of catalog results with the assembled pagination envelope.
#[derive(Debug)]
pub struct ProductPage {
    pub items: Vec<Product>,
    pub total_count: i64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
    pub has_previous_page: bool,
    pub has_next_page: bool,
}

#[async_trait]
pub trait GetProductPageUseCase: Send + Sync {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError>;
}
