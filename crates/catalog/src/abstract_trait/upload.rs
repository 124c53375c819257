use crate::domain::{requests::upload::UploadRequest, response::upload::UploadResponse};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynUploadService = Arc<dyn UploadServiceTrait + Send + Sync>;

#[async_trait]
pub trait UploadServiceTrait {
    async fn upload(&self, req: UploadRequest) -> Result<UploadResponse, ServiceError>;
}
