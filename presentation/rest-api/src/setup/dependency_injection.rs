use std::sync::Arc;

use asset_store::DiskImageStore;
use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::delete_image::DeleteImageUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_page::GetProductPageUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::product::upload_images::UploadImagesUseCaseImpl;
use business::application::user::login::LoginUseCaseImpl;
use business::application::user::register::RegisterUserUseCaseImpl;

use crate::api::security::JwtService;
use crate::config::{assets_config::AssetsConfig, jwt_config::JwtConfig};

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub product_api: crate::api::product::routes::ProductApi,
    pub auth_api: crate::api::auth::routes::AuthApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, assets: &AssetsConfig, jwt: &JwtConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool));
        let image_store = Arc::new(DiskImageStore::new(assets.root.clone()));

        // Product use cases
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let get_page_use_case = Arc::new(GetProductPageUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: product_repository.clone(),
            logger: logger.clone(),
        });
        let update_use_case = Arc::new(UpdateProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let upload_images_use_case = Arc::new(UploadImagesUseCaseImpl {
            repository: product_repository.clone(),
            image_store: image_store.clone(),
            logger: logger.clone(),
        });
        let delete_image_use_case = Arc::new(DeleteImageUseCaseImpl {
            repository: product_repository,
            image_store,
            logger: logger.clone(),
        });

        // User use cases
        let register_use_case = Arc::new(RegisterUserUseCaseImpl {
            repository: user_repository.clone(),
            logger: logger.clone(),
        });
        let login_use_case = Arc::new(LoginUseCaseImpl {
            repository: user_repository,
            logger,
        });

        let product_api = crate::api::product::routes::ProductApi::new(
            create_use_case,
            get_page_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
            upload_images_use_case,
            delete_image_use_case,
        );

        let auth_api = crate::api::auth::routes::AuthApi::new(
            register_use_case,
            login_use_case,
            Arc::new(JwtService::new(jwt)),
        );

        Self {
            health_api,
            product_api,
            auth_api,
        }
    }
}
