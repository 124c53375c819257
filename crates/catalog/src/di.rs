use crate::{
    abstract_trait::{
        auth::DynAuthService,
        category::service::{DynCategoryCommandService, DynCategoryQueryService},
        customer::service::{DynCustomerCommandService, DynCustomerQueryService},
        image::service::DynProductImageService,
        product::service::{DynProductCommandService, DynProductQueryService},
        storage::DynImageStorage,
        storefront::DynStorefrontService,
        upload::DynUploadService,
    },
    repository::Repositories,
    service::{
        auth::{AuthService, AuthServiceDeps},
        category::{CategoryCommandService, CategoryQueryService},
        customer::{CustomerCommandService, CustomerQueryService},
        image::ProductImageService,
        product::{ProductCommandService, ProductCommandServiceDeps, ProductQueryService},
        storefront::{StorefrontService, StorefrontSettings},
        upload::{UploadService, UploadServiceDeps},
    },
};
use prometheus_client::registry::Registry;
use shared::abstract_trait::{DynHashing, DynJwtService};
use std::sync::Arc;

/// Everything the service graph is built from.
#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub storage: DynImageStorage,
    pub hashing: DynHashing,
    pub jwt: DynJwtService,
    pub token_ttl_secs: i64,
    pub storefront: StorefrontSettings,
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub customer_query: DynCustomerQueryService,
    pub customer_command: DynCustomerCommandService,
    pub category_query: DynCategoryQueryService,
    pub category_command: DynCategoryCommandService,
    pub image_service: DynProductImageService,
    pub upload_service: DynUploadService,
    pub storefront_service: DynStorefrontService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("customer_query", &"DynCustomerQueryService")
            .field("customer_command", &"DynCustomerCommandService")
            .field("category_query", &"DynCategoryQueryService")
            .field("category_command", &"DynCategoryCommandService")
            .field("image_service", &"DynProductImageService")
            .field("upload_service", &"DynUploadService")
            .field("storefront_service", &"DynStorefrontService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps, registry: &mut Registry) -> Self {
        let DependenciesInjectDeps {
            repositories: repos,
            storage,
            hashing,
            jwt,
            token_ttl_secs,
            storefront,
        } = deps;

        let auth_service: DynAuthService = Arc::new(AuthService::new(
            AuthServiceDeps {
                admins: repos.admin.clone(),
                hashing,
                jwt,
                token_ttl_secs,
            },
            registry,
        ));

        let product_query: DynProductQueryService = Arc::new(ProductQueryService::new(
            repos.product_query.clone(),
            registry,
        ));

        let product_command: DynProductCommandService = Arc::new(ProductCommandService::new(
            ProductCommandServiceDeps {
                command: repos.product_command.clone(),
                query: repos.product_query.clone(),
                images: repos.image_command.clone(),
            },
            registry,
        ));

        let customer_query: DynCustomerQueryService = Arc::new(CustomerQueryService::new(
            repos.customer_query.clone(),
            registry,
        ));

        let customer_command: DynCustomerCommandService = Arc::new(CustomerCommandService::new(
            repos.customer_command.clone(),
            registry,
        ));

        let category_query: DynCategoryQueryService = Arc::new(CategoryQueryService::new(
            repos.category_query.clone(),
            registry,
        ));

        let category_command: DynCategoryCommandService = Arc::new(CategoryCommandService::new(
            repos.category_command.clone(),
            registry,
        ));

        let image_service: DynProductImageService = Arc::new(ProductImageService::new(
            repos.image_query.clone(),
            repos.image_command.clone(),
            registry,
        ));

        let upload_service: DynUploadService = Arc::new(UploadService::new(
            UploadServiceDeps {
                storage,
                products: repos.product_query.clone(),
                images: repos.image_command.clone(),
            },
            registry,
        ));

        let storefront_service: DynStorefrontService = Arc::new(StorefrontService::new(
            repos.product_query.clone(),
            storefront,
            registry,
        ));

        Self {
            auth_service,
            product_query,
            product_command,
            customer_query,
            customer_command,
            category_query,
            category_command,
            image_service,
            upload_service,
            storefront_service,
        }
    }
}
