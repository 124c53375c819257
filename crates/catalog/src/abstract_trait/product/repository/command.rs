use crate::{
    domain::requests::product::{NewProduct, ProductChanges},
    model::product::Product as ProductModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(&self, product: &NewProduct) -> Result<ProductModel, RepositoryError>;
    async fn update_product(
        &self,
        id: Uuid,
        changes: &ProductChanges,
    ) -> Result<ProductModel, RepositoryError>;
    async fn delete_product(&self, id: Uuid) -> Result<(), RepositoryError>;
}
