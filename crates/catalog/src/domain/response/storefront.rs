use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub price_label: String,
    pub stock: i32,
    pub image_url: Option<String>,
    pub order_link: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontSection {
    pub category: String,
    pub slug: Option<String>,
    pub products: Vec<StorefrontProduct>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontResponse {
    pub store_name: String,
    pub contact_link: String,
    pub sections: Vec<StorefrontSection>,
}
