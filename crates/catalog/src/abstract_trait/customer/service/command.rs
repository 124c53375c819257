use crate::domain::{
    requests::customer::{CreateCustomerRequest, UpdateCustomerRequest},
    response::{api::ApiResponse, customer::CustomerResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerCommandService = Arc<dyn CustomerCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandServiceTrait {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError>;
    async fn delete_customer(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError>;
}
