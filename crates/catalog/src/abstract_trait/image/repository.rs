use crate::{
    domain::requests::image::ImageUpsert, model::product_image::ProductImage as ProductImageModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynProductImageQueryRepository = Arc<dyn ProductImageQueryRepositoryTrait + Send + Sync>;
pub type DynProductImageCommandRepository =
    Arc<dyn ProductImageCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductImageQueryRepositoryTrait {
    /// Images of one product, newest first.
    async fn find_by_product(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<ProductImageModel>, RepositoryError>;
}

#[async_trait]
pub trait ProductImageCommandRepositoryTrait {
    /// Creates the (product, url) image, or updates its provider fields.
    async fn upsert_image(&self, image: &ImageUpsert)
    -> Result<ProductImageModel, RepositoryError>;
    /// Marks one image primary and clears the flag on its siblings.
    async fn set_primary(
        &self,
        product_id: Uuid,
        image_id: Uuid,
    ) -> Result<ProductImageModel, RepositoryError>;
    /// Leaves the product without a primary image; the images themselves stay.
    async fn clear_primary(&self, product_id: Uuid) -> Result<(), RepositoryError>;
    async fn delete_image(&self, product_id: Uuid, image_id: Uuid) -> Result<(), RepositoryError>;
}
