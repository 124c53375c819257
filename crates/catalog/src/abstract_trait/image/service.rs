use crate::domain::{
    requests::image::AttachImageRequest,
    response::{api::ApiResponse, image::ProductImageResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductImageService = Arc<dyn ProductImageServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductImageServiceTrait {
    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<ApiResponse<Vec<ProductImageResponse>>, ServiceError>;
    /// Upserts the image and makes it the product's primary image.
    async fn attach_image(
        &self,
        product_id: Uuid,
        req: &AttachImageRequest,
    ) -> Result<ApiResponse<ProductImageResponse>, ServiceError>;
    async fn set_primary(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ApiResponse<ProductImageResponse>, ServiceError>;
    async fn delete_image(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
