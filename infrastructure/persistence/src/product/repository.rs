use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{NewProduct, Product, ProductImage};
use business::domain::product::repository::{PageRequest, ProductRepository};

use super::entity::{ProductEntity, ProductImageEntity};
use crate::db::map_sqlx_err;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads the image rows for a set of products, grouped per product in
    /// insertion order (ascending id).
    async fn load_images(
        &self,
        product_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<ProductImage>>, RepositoryError> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, product_id, image_url FROM product_images WHERE product_id = ANY($1) ORDER BY id ASC",
        )
        .bind(product_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        let mut by_product: HashMap<i64, Vec<ProductImage>> = HashMap::new();
        for entity in entities {
            by_product
                .entry(entity.product_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(by_product)
    }
}

/// Escapes LIKE metacharacters so a search term always means a literal
/// substring.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_page(
        &self,
        request: &PageRequest,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let limit = i64::from(request.page_size);
        let offset = i64::from(request.page_number.saturating_sub(1)) * limit;

        // Name matching is case-insensitive; ordering is newest id first.
        let (entities, total_count) = match request.search.as_deref() {
            Some(search) if !search.trim().is_empty() => {
                let pattern = format!("%{}%", escape_like(search));
                let entities = sqlx::query_as::<_, ProductEntity>(
                    "SELECT id, name, description, price, quantity FROM products WHERE name ILIKE $1 ORDER BY id DESC LIMIT $2 OFFSET $3",
                )
                .bind(&pattern)
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

                let total_count: i64 =
                    sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE name ILIKE $1")
                        .bind(&pattern)
                        .fetch_one(&self.pool)
                        .await
                        .map_err(map_sqlx_err)?;

                (entities, total_count)
            }
            _ => {
                let entities = sqlx::query_as::<_, ProductEntity>(
                    "SELECT id, name, description, price, quantity FROM products ORDER BY id DESC LIMIT $1 OFFSET $2",
                )
                .bind(limit)
                .bind(offset)
                .fetch_all(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

                let total_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
                    .fetch_one(&self.pool)
                    .await
                    .map_err(map_sqlx_err)?;

                (entities, total_count)
            }
        };

        let product_ids: Vec<i64> = entities.iter().map(|entity| entity.id).collect();
        let mut images = self.load_images(&product_ids).await?;

        let products = entities
            .into_iter()
            .map(|entity| {
                let owned = images.remove(&entity.id).unwrap_or_default();
                entity.into_domain(owned)
            })
            .collect();

        Ok((products, total_count))
    }

    async fn get_by_id(&self, id: i64) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, quantity FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?
        .ok_or(RepositoryError::NotFound)?;

        let mut images = self.load_images(&[id]).await?;
        Ok(entity.into_domain(images.remove(&id).unwrap_or_default()))
    }

    async fn insert(&self, product: &NewProduct) -> Result<i64, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO products (name, description, price, quantity) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(product.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        fields: &NewProduct,
        remove_image_ids: &[i64],
    ) -> Result<(), RepositoryError> {
        // Scalar overwrite and image-row removal commit together; a crash
        // can never apply one without the other.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        sqlx::query(
            "UPDATE products SET name = $2, description = $3, price = $4, quantity = $5 WHERE id = $1",
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.description)
        .bind(&fields.price)
        .bind(fields.quantity)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_err)?;

        if !remove_image_ids.is_empty() {
            sqlx::query("DELETE FROM product_images WHERE product_id = $1 AND id = ANY($2)")
                .bind(id)
                .bind(remove_image_ids)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;
        }

        tx.commit().await.map_err(map_sqlx_err)
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        // Image rows go with the product through the FK cascade, so this
        // single statement is the whole transaction.
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn insert_image(
        &self,
        product_id: i64,
        image_url: &str,
    ) -> Result<i64, RepositoryError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO product_images (product_id, image_url) VALUES ($1, $2) RETURNING id",
        )
        .bind(product_id)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(id)
    }

    async fn remove_image(&self, image_id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM product_images WHERE id = $1")
            .bind(image_id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(())
    }

    async fn find_image(
        &self,
        image_id: i64,
    ) -> Result<Option<ProductImage>, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductImageEntity>(
            "SELECT id, product_id, image_url FROM product_images WHERE id = $1",
        )
        .bind(image_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(entity.map(ProductImageEntity::into_domain))
    }
}
