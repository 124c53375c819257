use crate::{
    domain::requests::category::{CategoryChanges, NewCategory},
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create_category(
        &self,
        category: &NewCategory,
    ) -> Result<CategoryModel, RepositoryError>;
    /// Inserts, or renames the category that already owns the slug.
    async fn upsert_by_slug(&self, category: &NewCategory)
    -> Result<CategoryModel, RepositoryError>;
    async fn update_category(
        &self,
        id: Uuid,
        changes: &CategoryChanges,
    ) -> Result<CategoryModel, RepositoryError>;
    async fn delete_category(&self, id: Uuid) -> Result<(), RepositoryError>;
}
