use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{NewProduct, Product, ProductImage};

/// Paging inputs for a catalog listing. The boundary layer clamps
/// `page_number >= 1` and `page_size` into `[1, 50]` before this struct is
/// built; the repository trusts the values it receives.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub search: Option<String>,
}

/// Persistence boundary for product and image records. Pure data access:
/// no filesystem interaction and no business validation beyond what the
/// store itself enforces (foreign keys, uniqueness).
///
/// Listing policy, pinned here because it defines pagination semantics:
/// products are ordered by descending id (newest first), the optional
/// search is a case-insensitive substring match on the name, and a
/// product's images load eagerly in insertion order (ascending image id).
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns one page of products plus the total row count for the
    /// same filter.
    async fn get_page(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<Product>, i64), RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError>;

    /// Inserts the scalar record and returns the generated id. Image
    /// records are attached separately through `insert_image`.
    async fn insert(&self, product: &NewProduct) -> Result<i64, RepositoryError>;

    /// Full overwrite of the scalar fields plus removal of the listed
    /// image rows, committed together in one transaction. `remove_image_ids`
    /// is constrained to rows owned by `id`.
    async fn update(
        &self,
        id: i64,
        fields: &NewProduct,
        remove_image_ids: &[i64],
    ) -> Result<(), RepositoryError>;

    /// Removes the product and, through the store's cascade, all of its
    /// image rows as one atomic step. Returns false when no such product
    /// exists.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;

    async fn insert_image(
        &self,
        product_id: i64,
        image_url: &str,
    ) -> Result<i64, RepositoryError>;

    async fn remove_image(&self, image_id: i64) -> Result<(), RepositoryError>;

    async fn find_image(
        &self,
        image_id: i64,
    ) -> Result<Option<ProductImage>, RepositoryError>;
}
