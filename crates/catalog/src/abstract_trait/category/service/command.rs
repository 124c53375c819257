use crate::domain::{
    requests::category::{CreateCategoryRequest, UpdateCategoryRequest},
    response::{api::ApiResponse, category::CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCategoryCommandService = Arc<dyn CategoryCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryCommandServiceTrait {
    async fn create_category(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update_category(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete_category(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
    /// Ensures the default storefront categories exist.
    async fn seed_defaults(&self) -> Result<usize, ServiceError>;
}
