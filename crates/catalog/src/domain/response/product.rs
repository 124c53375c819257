use crate::model::product::Product as ProductModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub stock: i32,
    pub status: String,
    pub category_id: Option<Uuid>,
    pub category: Option<CategorySummary>,
    /// URL of the primary image.
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        let category = match (value.category_id, value.category_name, value.category_slug) {
            (Some(id), Some(name), Some(slug)) => Some(CategorySummary { id, name, slug }),
            _ => None,
        };

        ProductResponse {
            id: value.id,
            name: value.name,
            description: value.description,
            price_cents: value.price_cents,
            stock: value.stock,
            status: value.status,
            category_id: value.category_id,
            category,
            image_url: value.image_url,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
