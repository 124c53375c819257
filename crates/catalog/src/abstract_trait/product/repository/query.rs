use crate::model::product::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// Every product, newest first.
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ProductModel>, RepositoryError>;
}
