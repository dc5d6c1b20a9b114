use std::sync::Arc;

use poem_openapi::types::multipart::Upload;
use poem_openapi::{OpenApi, param::Path, param::Query, payload::Json};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::delete_image::{DeleteImageParams, DeleteImageUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::get_page::{
    GetProductPageParams, GetProductPageUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::use_cases::upload_images::{
    ImageUpload, UploadImagesParams, UploadImagesUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{
    CreateProductForm, ImageUploadResponse, PaginatedProductsResponse, ProductResponse,
    UpdateProductForm, UploadImagesForm,
};
use crate::api::security::AdminBearer;
use crate::api::tags::ApiTags;

const DEFAULT_PAGE_SIZE: u32 = 8;
const MAX_PAGE_SIZE: u32 = 50;

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_page_use_case: Arc<dyn GetProductPageUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    upload_images_use_case: Arc<dyn UploadImagesUseCase>,
    delete_image_use_case: Arc<dyn DeleteImageUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_page_use_case: Arc<dyn GetProductPageUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        upload_images_use_case: Arc<dyn UploadImagesUseCase>,
        delete_image_use_case: Arc<dyn DeleteImageUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_page_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            upload_images_use_case,
            delete_image_use_case,
        }
    }
}

/// Clamps raw query parameters before they reach the core: page numbers
/// start at 1 and page sizes stay inside [1, 50], defaulting to 8.
fn clamp_paging(page_number: Option<u32>, page_size: Option<u32>) -> (u32, u32) {
    let page_number = page_number.unwrap_or(1).max(1);
    let page_size = match page_size {
        None | Some(0) => DEFAULT_PAGE_SIZE,
        Some(size) => size.min(MAX_PAGE_SIZE),
    };
    (page_number, page_size)
}

/// Drains the multipart uploads into memory. A file whose body cannot be
/// read is logged and dropped, like any other per-file failure.
async fn read_uploads(files: Vec<Upload>) -> Vec<ImageUpload> {
    let mut uploads = Vec::with_capacity(files.len());
    for file in files {
        let file_name = file
            .file_name()
            .map(ToString::to_string)
            .unwrap_or_default();
        match file.into_vec().await {
            Ok(bytes) => uploads.push(ImageUpload { file_name, bytes }),
            Err(err) => tracing::warn!(?err, file = %file_name, "failed to read uploaded file"),
        }
    }
    uploads
}

fn invalid_id_response() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        name: "ValidationError".to_string(),
        message: "product.invalid_id".to_string(),
    })
}

/// Product catalog API
///
/// Listing and reads are public; every mutation requires an Admin token.
#[OpenApi]
impl ProductApi {
    /// List products
    ///
    /// Returns one page of products, newest first, optionally filtered by
    /// a case-insensitive substring of the name.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_products(
        &self,
        page_number: Query<Option<u32>>,
        page_size: Query<Option<u32>>,
        search: Query<Option<String>>,
    ) -> GetProductsResponse {
        let (page_number, page_size) = clamp_paging(page_number.0, page_size.0);

        match self
            .get_page_use_case
            .execute(GetProductPageParams {
                page_number,
                page_size,
                search: search.0,
            })
            .await
        {
            Ok(page) => GetProductsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    503 => GetProductsResponse::ServiceUnavailable(json),
                    _ => GetProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    ///
    /// Returns a single product with its images.
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<i64>) -> GetProductByIdResponse {
        if id.0 <= 0 {
            return GetProductByIdResponse::BadRequest(invalid_id_response());
        }

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id: id.0 })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    503 => GetProductByIdResponse::ServiceUnavailable(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a product
    ///
    /// Accepts multipart form data with scalar fields and zero or more
    /// image files. Files failing the extension or size policy are
    /// skipped; the product is still created.
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(
        &self,
        auth: AdminBearer,
        form: CreateProductForm,
    ) -> CreateProductResponse {
        tracing::info!(user = %auth.0.username, "create product request");

        let images = read_uploads(form.images).await;
        let params = CreateProductParams {
            name: form.name,
            description: form.description,
            price: form.price,
            quantity: form.quantity,
            images,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    503 => CreateProductResponse::ServiceUnavailable(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Full-replace of the scalar fields, plus removal of the listed
    /// image ids and attachment of any new files, in that order.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        auth: AdminBearer,
        id: Path<i64>,
        form: UpdateProductForm,
    ) -> UpdateProductResponse {
        if id.0 <= 0 {
            return UpdateProductResponse::BadRequest(invalid_id_response());
        }
        tracing::info!(user = %auth.0.username, product = id.0, "update product request");

        let new_images = read_uploads(form.new_images).await;
        let params = UpdateProductParams {
            id: id.0,
            name: form.name,
            description: form.description,
            price: form.price,
            quantity: form.quantity,
            remove_image_ids: form.remove_image_ids,
            new_images,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    503 => UpdateProductResponse::ServiceUnavailable(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Removes the product, its image records, and best-effort its image
    /// files.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, auth: AdminBearer, id: Path<i64>) -> DeleteProductResponse {
        if id.0 <= 0 {
            return DeleteProductResponse::BadRequest(invalid_id_response());
        }
        tracing::info!(user = %auth.0.username, product = id.0, "delete product request");

        match self
            .delete_use_case
            .execute(DeleteProductParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    503 => DeleteProductResponse::ServiceUnavailable(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Upload images to a product
    ///
    /// Succeeds when at least one file passes the policy; a batch where
    /// every file is rejected is reported as a failure.
    #[oai(
        path = "/products/:id/images",
        method = "post",
        tag = "ApiTags::Products"
    )]
    async fn upload_images(
        &self,
        auth: AdminBearer,
        id: Path<i64>,
        form: UploadImagesForm,
    ) -> UploadImagesResponse {
        if id.0 <= 0 {
            return UploadImagesResponse::BadRequest(invalid_id_response());
        }
        tracing::info!(
            user = %auth.0.username,
            product = id.0,
            files = form.images.len(),
            "upload images request"
        );

        let files = read_uploads(form.images).await;
        match self
            .upload_images_use_case
            .execute(UploadImagesParams {
                product_id: id.0,
                files,
            })
            .await
        {
            Ok(report) => UploadImagesResponse::Ok(Json(ImageUploadResponse {
                message: format!("{} images uploaded successfully", report.image_urls.len()),
                image_urls: report.image_urls,
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UploadImagesResponse::BadRequest(json),
                    404 => UploadImagesResponse::NotFound(json),
                    503 => UploadImagesResponse::ServiceUnavailable(json),
                    _ => UploadImagesResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a single image
    ///
    /// Removes the image record and best-effort its backing file.
    #[oai(
        path = "/products/images/:image_id",
        method = "delete",
        tag = "ApiTags::Products"
    )]
    async fn delete_image(&self, auth: AdminBearer, image_id: Path<i64>) -> DeleteImageResponse {
        if image_id.0 <= 0 {
            return DeleteImageResponse::BadRequest(invalid_id_response());
        }
        tracing::info!(user = %auth.0.username, image = image_id.0, "delete image request");

        match self
            .delete_image_use_case
            .execute(DeleteImageParams {
                image_id: image_id.0,
            })
            .await
        {
            Ok(()) => DeleteImageResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteImageResponse::NotFound(json),
                    503 => DeleteImageResponse::ServiceUnavailable(json),
                    _ => DeleteImageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductsResponse {
    #[oai(status = 200)]
    Ok(Json<PaginatedProductsResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UploadImagesResponse {
    #[oai(status = 200)]
    Ok(Json<ImageUploadResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteImageResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
