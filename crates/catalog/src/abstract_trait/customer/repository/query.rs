use crate::model::customer::Customer as CustomerModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerQueryRepository = Arc<dyn CustomerQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CustomerModel>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<CustomerModel>, RepositoryError>;
}
