use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::pagination::PageMeta;
use crate::domain::product::repository::{PageRequest, ProductRepository};
use crate::domain::product::use_cases::get_page::{
    GetProductPageParams, GetProductPageUseCase, ProductPage,
};

pub struct GetProductPageUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductPageUseCase for GetProductPageUseCaseImpl {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError> {
        self.logger.debug(&format!(
            "Listing products: page {} size {} search {:?}",
            params.page_number, params.page_size, params.search
        ));

        let request = PageRequest {
            page_number: params.page_number,
            page_size: params.page_size,
            search: params.search,
        };
        let (items, total_count) = self.repository.get_page(&request).await?;
        let meta = PageMeta::new(total_count, request.page_number, request.page_size);

        Ok(ProductPage {
            items,
            total_count,
            total_pages: meta.total_pages,
            current_page: request.page_number,
            page_size: request.page_size,
            has_previous_page: meta.has_previous,
            has_next_page: meta.has_next,
        })
    }
}
