use crate::model::category::Category as CategoryModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    /// Every category, by name.
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CategoryModel>, RepositoryError>;
}
