use crate::model::status::ImageProvider;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub url: String,
    pub provider: ImageProvider,
    pub public_id: Option<String>,
}
