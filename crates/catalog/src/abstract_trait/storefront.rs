use crate::domain::response::{api::ApiResponse, storefront::StorefrontResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynStorefrontService = Arc<dyn StorefrontServiceTrait + Send + Sync>;

#[async_trait]
pub trait StorefrontServiceTrait {
    async fn catalog(&self) -> Result<ApiResponse<StorefrontResponse>, ServiceError>;
}
