use crate::domain::response::{api::ApiResponse, category::CategoryResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
}
