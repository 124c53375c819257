use crate::model::customer::Customer as CustomerModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CustomerModel> for CustomerResponse {
    fn from(value: CustomerModel) -> Self {
        CustomerResponse {
            id: value.id,
            name: value.name,
            email: value.email,
            phone: value.phone,
            notes: value.notes,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
