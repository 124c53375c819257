mod admin_user;
mod category;
mod customer;
mod image;
mod memory;
pub(crate) mod product;

pub use self::admin_user::AdminUserRepository;
pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::customer::{CustomerCommandRepository, CustomerQueryRepository};
pub use self::image::ProductImageRepository;
pub use self::memory::MemoryStore;
pub use self::product::{ProductCommandRepository, ProductQueryRepository};

use crate::abstract_trait::{
    auth::DynAdminUserRepository,
    category::repository::{DynCategoryCommandRepository, DynCategoryQueryRepository},
    customer::repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
    image::repository::{DynProductImageCommandRepository, DynProductImageQueryRepository},
    product::repository::{DynProductCommandRepository, DynProductQueryRepository},
};
use shared::config::ConnectionPool;
use std::sync::Arc;

/// Every repository the services need, behind its trait object.
#[derive(Clone)]
pub struct Repositories {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub customer_query: DynCustomerQueryRepository,
    pub customer_command: DynCustomerCommandRepository,
    pub category_query: DynCategoryQueryRepository,
    pub category_command: DynCategoryCommandRepository,
    pub image_query: DynProductImageQueryRepository,
    pub image_command: DynProductImageCommandRepository,
    pub admin: DynAdminUserRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        let images = Arc::new(ProductImageRepository::new(pool.clone()));

        Self {
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            customer_query: Arc::new(CustomerQueryRepository::new(pool.clone())),
            customer_command: Arc::new(CustomerCommandRepository::new(pool.clone())),
            category_query: Arc::new(CategoryQueryRepository::new(pool.clone())),
            category_command: Arc::new(CategoryCommandRepository::new(pool.clone())),
            image_query: images.clone(),
            image_command: images,
            admin: Arc::new(AdminUserRepository::new(pool)),
        }
    }

    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);

        Self {
            product_query: store.clone(),
            product_command: store.clone(),
            customer_query: store.clone(),
            customer_command: store.clone(),
            category_query: store.clone(),
            category_command: store.clone(),
            image_query: store.clone(),
            image_command: store.clone(),
            admin: store,
        }
    }
}
