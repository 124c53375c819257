use crate::{
    abstract_trait::customer::{
        repository::DynCustomerQueryRepository, service::CustomerQueryServiceTrait,
    },
    domain::{
        requests::filter::{ListQuery, matches_any},
        response::{api::ApiResponse, customer::CustomerResponse},
    },
    service::repo_failure,
};
use async_trait::async_trait;
use opentelemetry::KeyValue;
use prometheus_client::registry::Registry;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::{Method, ServiceTracer},
};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Clone)]
pub struct CustomerQueryService {
    query: DynCustomerQueryRepository,
    tracer: ServiceTracer,
}

impl CustomerQueryService {
    pub fn new(query: DynCustomerQueryRepository, registry: &mut Registry) -> Self {
        Self {
            query,
            tracer: ServiceTracer::new("customer-query-service", registry),
        }
    }
}

#[async_trait]
impl CustomerQueryServiceTrait for CustomerQueryService {
    async fn find_all(
        &self,
        req: &ListQuery,
    ) -> Result<ApiResponse<Vec<CustomerResponse>>, ServiceError> {
        let needle = req.needle();
        info!("🔍 Finding all customers | Search: '{}'", needle.as_deref().unwrap_or_default());

        let tracing_ctx = self.tracer.start(
            "customer_find_all",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("search", needle.clone().unwrap_or_default()),
            ],
        );

        let customers = match self.query.find_all().await {
            Ok(customers) => customers,
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch customers", e);
                error!("❌ {msg}");
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                return Err(err);
            }
        };

        let data: Vec<CustomerResponse> = customers
            .into_iter()
            .filter(|c| {
                needle.as_deref().is_none_or(|needle| {
                    matches_any(
                        needle,
                        &[Some(c.name.as_str()), c.email.as_deref(), c.phone.as_deref()],
                    )
                })
            })
            .map(CustomerResponse::from)
            .collect();

        info!("✅ Found {} customers", data.len());
        self.tracer
            .success(&tracing_ctx, Method::Get, "Customers retrieved");

        Ok(ApiResponse::success("Customers retrieved successfully", data))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<ApiResponse<CustomerResponse>, ServiceError> {
        info!("🆔 Finding customer by ID: {id}");

        let tracing_ctx = self.tracer.start(
            "customer_find_by_id",
            vec![
                KeyValue::new("component", "customer"),
                KeyValue::new("customer.id", id.to_string()),
            ],
        );

        match self.query.find_by_id(id).await {
            Ok(Some(customer)) => {
                self.tracer
                    .success(&tracing_ctx, Method::Get, "Customer retrieved");
                Ok(ApiResponse::success(
                    "Customer retrieved successfully",
                    CustomerResponse::from(customer),
                ))
            }
            Ok(None) => {
                self.tracer
                    .failure(&tracing_ctx, Method::Get, "Customer not found");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                let (msg, err) = repo_failure("Failed to fetch customer", e);
                self.tracer.failure(&tracing_ctx, Method::Get, &msg);
                Err(err)
            }
        }
    }
}
