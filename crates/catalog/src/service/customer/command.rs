use crate::{
    abstract_trait::customer::{
        repository::DynCustomerCommandRepository, service::CustomerCommandServiceTrait,
    },
    domain::{
        requests::customer::{
            CreateCustomerRequest, CustomerChanges, NewCustomer, UpdateCustomerRequest,
        },
        response::{api::ApiResponse, customer::CustomerResponse},
    },
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::ServiceError,
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerCommandService {
    command: DynCustomerCommandRepository,
    tracer: ServiceTracer,
}

impl CustomerCommandService {
    pub fn new(command: DynCustomerCommandRepository, registry: &mut Registry) -> Self {
        Self {
            command,
            tracer: ServiceTracer::new("customer-command-service", registry),
        }
    }
}

#[async_trait]
impl CustomerCommandServiceTrait for CustomerCommandService {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let customer = NewCustomer::try_from(req)?;
        info!("🆕 Creating customer: {}", customer.name);

        let tracing_ctx = self.tracer.start(
            "customer_create",
            vec![KeyValue::new("component", "customer")],
        );

        match self.command.create_customer(&customer).await {
            Ok(created) => {
                self.tracer
                    .success(&tracing_ctx, Method::Post, "Customer created");
                Ok(ApiResponse::success(
                    "Customer created successfully",
                    CustomerResponse::from(created),
                ))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to create customer", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Post, &msg);
                Err(err)
            }
        }
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        let id = req.id.ok_or_else(|| ServiceError::field("id", "Required"))?;
        let changes = CustomerChanges::try_from(req)?;
        info!("🔄 Updating customer ID: {id}");

        let tracing_ctx = self.tracer.start(
            "customer_update",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        match self.command.update_customer(id, &changes).await {
            Ok(updated) => {
                self.tracer
                    .success(&tracing_ctx, Method::Put, "Customer updated");
                Ok(ApiResponse::success(
                    "Customer updated successfully",
                    CustomerResponse::from(updated),
                ))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to update customer", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Put, &msg);
                Err(err)
            }
        }
    }

    async fn delete_customer(&self, id: Uuid) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting customer ID: {id}");

        let tracing_ctx = self.tracer.start(
            "customer_delete",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        match self.command.delete_customer(id).await {
            Ok(()) => {
                self.tracer
                    .success(&tracing_ctx, Method::Delete, "Customer deleted");
                Ok(ApiResponse::success("Customer deleted successfully", ()))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to delete customer", e);
                self.tracer.failure(&tracing_ctx, Method::Delete, &msg);
                Err(err)
            }
        }
    }
}
