use crate::model::status::ImageProvider;
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynImageStorage = Arc<dyn ImageStorageTrait + Send + Sync>;

/// Bytes of an accepted image, with its resolved MIME type.
#[derive(Debug, Clone)]
pub struct ImageFile<'a> {
    pub bytes: &'a [u8],
    pub mime: &'a str,
    pub file_name: Option<&'a str>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub provider: ImageProvider,
    pub public_id: Option<String>,
}

#[async_trait]
pub trait ImageStorageTrait: std::fmt::Debug {
    fn provider(&self) -> ImageProvider;
    async fn store(&self, file: &ImageFile<'_>) -> Result<StoredImage, ServiceError>;
}
