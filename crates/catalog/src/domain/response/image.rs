use crate::model::product_image::ProductImage as ProductImageModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductImageResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub url: String,
    pub provider: Option<String>,
    pub public_id: Option<String>,
    pub is_primary: bool,
    pub created_at: DateTime<Utc>,
}

impl From<ProductImageModel> for ProductImageResponse {
    fn from(value: ProductImageModel) -> Self {
        ProductImageResponse {
            id: value.id,
            product_id: value.product_id,
            url: value.url,
            provider: value.provider,
            public_id: value.public_id,
            is_primary: value.is_primary,
            created_at: value.created_at,
        }
    }
}
