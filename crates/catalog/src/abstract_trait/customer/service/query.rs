use crate::domain::{
    requests::filter::ListQuery,
    response::{api::ApiResponse, customer::CustomerResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerQueryService = Arc<dyn CustomerQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryServiceTrait {
    async fn find_all(
        &self,
        req: &ListQuery,
    ) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError>;
    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
}
