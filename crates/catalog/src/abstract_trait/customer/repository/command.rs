use crate::{
    domain::requests::customer::{CustomerChanges, NewCustomer},
    model::customer::Customer as CustomerModel,
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;
use uuid::Uuid;

pub type DynCustomerCommandRepository = Arc<dyn CustomerCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CustomerCommandRepositoryTrait {
    async fn create_customer(
        &self,
        customer: &NewCustomer,
    ) -> Result<CustomerModel, RepositoryError>;
    async fn update_customer(
        &self,
        id: Uuid,
        changes: &CustomerChanges,
    ) -> Result<CustomerModel, RepositoryError>;
    async fn delete_customer(&self, id: Uuid) -> Result<(), RepositoryError>;
}
